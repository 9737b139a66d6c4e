pub mod id_gen;
pub mod injector;
pub mod runner;
pub mod widgets;
