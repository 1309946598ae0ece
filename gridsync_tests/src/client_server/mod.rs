mod colors;
mod connection;
mod game;
mod messages;
mod sync;
