pub mod ghost_server;
