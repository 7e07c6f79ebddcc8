pub mod overview;
pub mod vehicles;
