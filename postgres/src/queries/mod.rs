mod ais;
mod port;
