mod check;
mod lint;
mod rules;
mod scan;

pub use check::check;
pub use lint::lint;
pub use rules::rules;
pub use scan::scan;
