pub mod profile_summary;
