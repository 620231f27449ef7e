// HTTP handlers for the plagiarism API.

pub mod check;
