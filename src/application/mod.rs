// Application layer - Use-case services and the decoder seam
pub mod decoder_service;
pub mod submission;
