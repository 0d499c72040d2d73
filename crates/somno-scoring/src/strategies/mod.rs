pub mod legacy;
pub mod primary;
