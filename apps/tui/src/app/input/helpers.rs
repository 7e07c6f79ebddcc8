pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Steps through `options` with an extra leading "All" slot represented by
/// `None`.
pub fn cycle_option<T: Clone + PartialEq>(
    options: &[T],
    current: Option<&T>,
    forward: bool,
) -> Option<T> {
    let slots = options.len() + 1;
    let position = current
        .and_then(|value| options.iter().position(|option| option == value))
        .map_or(0, |index| index + 1);

    let next = if forward {
        wrap_increment(position, slots)
    } else {
        wrap_decrement(position, slots)
    };

    next.checked_sub(1).and_then(|index| options.get(index).cloned())
}
