pub mod read_media;
