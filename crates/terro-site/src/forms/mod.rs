//! Form controller: contact form validation and submission

mod contact;
mod submit;
mod validation;

pub use contact::{ContactForm, FIELD_IDS};
pub use submit::{Ack, SimulatedSubmitter, SubmitError, Submission, Submitter};
pub use validation::{
    format_field_name, is_valid_email, is_valid_phone, validate, FieldError, MIN_MESSAGE_LEN,
};
