pub mod bdsp;
pub mod contact;
