use regex::Regex;
use std::sync::LazyLock;

// Book names are a lazy run of word characters, digits and spaces so that
// numbered books ("1 Corinthians") keep their leading number.
const BOOK: &str = r"^([\d\s\w]+?)\s+";
const VERSION: &str = r"\s*([A-Z]+)?$";

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Order matters: the single chapter pattern would shadow the other two.
regex!(VERSE_REGEX, format!(r"(?i){}(\d+):(\d+)(?:-(\d+))?{}", BOOK, VERSION).as_str());
regex!(CHAPTER_RANGE_REGEX, format!(r"(?i){}(\d+)-(\d+){}", BOOK, VERSION).as_str());
regex!(CHAPTER_REGEX, format!(r"(?i){}(\d+){}", BOOK, VERSION).as_str());
