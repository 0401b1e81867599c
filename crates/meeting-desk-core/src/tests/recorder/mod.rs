mod action_items;
mod recording;
mod session;
