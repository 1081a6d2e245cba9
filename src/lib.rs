pub mod basedir;
pub mod desktop;
pub mod mimeapps;
pub mod model;
pub mod subclass;
