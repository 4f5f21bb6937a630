//! Client for the identity-document verification flow.
//!
//! A client receives a link carrying `token` and `email` query parameters, picks
//! an image or PDF, and submits it as a multipart POST to the verification API.
//! [`application::validator`] decides whether a file may be sent,
//! [`application::form_controller`] drives the form, and
//! [`services::HttpVerificationService`] performs the requests.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod services;
