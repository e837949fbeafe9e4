pub mod generate_video;
