mod route_preference;

pub mod pareto_ops;

pub use route_preference::RoutePreference;
