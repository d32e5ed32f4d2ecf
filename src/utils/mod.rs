mod shuffle;

pub use shuffle::fisher_yates;
