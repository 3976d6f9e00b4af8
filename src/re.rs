use super::*;

pub(crate) static LINE_BREAKS_AND_TABS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\n|\r|\t").unwrap());

pub(crate) static SPACE_RUNS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[ ]{2,}").unwrap());
