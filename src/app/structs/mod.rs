pub mod from_request;
