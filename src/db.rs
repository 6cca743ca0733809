pub mod usage_dump_archive;
