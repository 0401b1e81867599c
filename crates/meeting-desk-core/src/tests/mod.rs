mod meeting;
mod recorder;
