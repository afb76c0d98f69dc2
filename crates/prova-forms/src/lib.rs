//! # prova-forms
//!
//! Per-screen form state machines for the prova client. Currently the
//! create-test form: reference-data loading keyed by a generation counter,
//! cascading discipline → instructor selection, validation, and submission
//! with alert-based outcome reporting.

pub mod gateway;

pub use create_test::{
    CreateTestForm, FormPhase, LoadTicket, Navigation, REQUIRED_FIELDS_MESSAGE, RETRY_MESSAGE,
    TestFields,
};
pub use gateway::CreateTestGateway;
