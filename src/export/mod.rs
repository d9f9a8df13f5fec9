mod stylesheet;

pub use stylesheet::css_variables;
