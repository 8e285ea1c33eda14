pub mod checksum;
pub mod generate;
pub mod inspect;
