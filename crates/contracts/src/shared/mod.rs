pub mod action_state;
pub mod contact;
pub mod form_value;
pub mod validation;
