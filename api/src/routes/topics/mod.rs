pub mod topics_route;
