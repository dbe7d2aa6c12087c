//! Bible book index and chapter links
//!
//! Turns a "Book Chapter" reference into the reader link offered next to the
//! mark-read action.

/// Canonical book names, in order (Genesis = 1)
pub const BOOKS: [&str; 66] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Alternate spellings seen in daily scripture feeds
const ALIASES: [(&str, u32); 3] = [("Psalm", 19), ("Song of Songs", 22), ("Revelations", 66)];

/// Reader link template; `{code}` is replaced by the bible code
const CHAPTER_LINK: &str =
    "https://www.jw.org/finder?srcid=jwlshare&wtlocale=E&prefer=lang&bible={code}&pub=nwtsty";

/// 1-based index of a book, matched case-insensitively
pub fn book_index(name: &str) -> Option<u32> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    BOOKS
        .iter()
        .position(|book| book.eq_ignore_ascii_case(name))
        .map(|i| i as u32 + 1)
        .or_else(|| {
            ALIASES
                .iter()
                .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
                .map(|(_, index)| *index)
        })
}

/// Split "Book Chapter" at the last space
///
/// Works for multi-word books ("1 Samuel 3", "Song of Solomon 2").
pub fn split_book_and_chapter(book_and_chapter: &str) -> Option<(&str, u32)> {
    let (book, chapter) = book_and_chapter.trim().rsplit_once(' ')?;
    let chapter = chapter.parse::<u32>().ok().filter(|c| *c > 0)?;
    let book = book.trim();
    if book.is_empty() {
        return None;
    }
    Some((book, chapter))
}

/// Bible code for the first verse of a chapter: `{book}{chapter:03}001`
pub fn bible_code(book_and_chapter: &str) -> Option<String> {
    let (book, chapter) = split_book_and_chapter(book_and_chapter)?;
    let index = book_index(book)?;
    Some(format!("{}{:03}001", index, chapter))
}

/// Link to read the given chapter online
pub fn chapter_link(book_and_chapter: &str) -> Option<String> {
    bible_code(book_and_chapter).map(|code| CHAPTER_LINK.replace("{code}", &code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_index_bounds() {
        assert_eq!(book_index("Genesis"), Some(1));
        assert_eq!(book_index("Malachi"), Some(39));
        assert_eq!(book_index("Matthew"), Some(40));
        assert_eq!(book_index("Revelation"), Some(66));
    }

    #[test]
    fn test_book_index_is_forgiving() {
        assert_eq!(book_index("  genesis "), Some(1));
        assert_eq!(book_index("1 SAMUEL"), Some(9));
        assert_eq!(book_index("Psalm"), Some(19));
        assert_eq!(book_index("Song of Songs"), Some(22));
    }

    #[test]
    fn test_book_index_unknown() {
        assert_eq!(book_index(""), None);
        assert_eq!(book_index("Maccabees"), None);
    }

    #[test]
    fn test_split_book_and_chapter() {
        assert_eq!(split_book_and_chapter("Genesis 1"), Some(("Genesis", 1)));
        assert_eq!(split_book_and_chapter("1 Samuel 17"), Some(("1 Samuel", 17)));
        assert_eq!(
            split_book_and_chapter("Song of Solomon 2"),
            Some(("Song of Solomon", 2))
        );
        assert_eq!(split_book_and_chapter("Genesis"), None);
        assert_eq!(split_book_and_chapter("Genesis one"), None);
        assert_eq!(split_book_and_chapter("Genesis 0"), None);
    }

    #[test]
    fn test_bible_code() {
        assert_eq!(bible_code("Genesis 1").as_deref(), Some("1001001"));
        assert_eq!(bible_code("Psalms 119").as_deref(), Some("19119001"));
        assert_eq!(bible_code("Revelation 22").as_deref(), Some("66022001"));
        assert_eq!(bible_code("Unknown 3"), None);
    }

    #[test]
    fn test_chapter_link() {
        let link = chapter_link("Genesis 1").unwrap();
        assert!(link.starts_with("https://www.jw.org/finder?"));
        assert!(link.contains("bible=1001001"));
        assert!(link.ends_with("&pub=nwtsty"));
    }
}
