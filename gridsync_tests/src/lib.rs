/*! # Gridsync Tests

A [`ServerClientStepper`](stepper::ServerClientStepper) that runs one server and several clients in
the same process, connected by crossbeam channels, and the end-to-end tests that use it.
*/

pub mod stepper;

#[cfg(test)]
mod client_server;
