//! Outbound network collaborators.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page talks to exactly one external service: a mail relay that
//! forwards contact form messages. Everything else runs in the browser.

pub mod relay;
