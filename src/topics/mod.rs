// Topic helpers: TF-IDF key terms and keyword overlap.

pub mod keywords;
pub mod overlap;
