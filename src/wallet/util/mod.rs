pub mod cents;
