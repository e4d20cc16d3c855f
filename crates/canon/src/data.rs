//! The canonical 66-book table.
//!
//! Verse counts follow the versification used by the common English
//! translations (KJV/NKJV lineage).

use crate::book::{BookEntry, Testament};

pub(crate) static BOOKS: [BookEntry; 66] = [
    BookEntry {
        name: "Genesis",
        testament: Testament::Old,
        ordinal: 1,
        usfm: "GEN",
        chapters: &[31, 25, 24, 26, 32, 22, 24, 22, 29, 32, 32, 20, 18, 24, 21, 16, 27, 33, 38, 18, 34, 24, 20, 67, 34, 35, 46, 22, 35, 43, 55, 32, 20, 31, 29, 43, 36, 30, 23, 23, 57, 38, 34, 34, 28, 34, 31, 22, 33, 26],
        aliases: &["Gen", "Ge", "Gn"],
    },
    BookEntry {
        name: "Exodus",
        testament: Testament::Old,
        ordinal: 2,
        usfm: "EXO",
        chapters: &[22, 25, 22, 31, 23, 30, 25, 32, 35, 29, 10, 51, 22, 31, 27, 36, 16, 27, 25, 26, 36, 31, 33, 18, 40, 37, 21, 43, 46, 38, 18, 35, 23, 35, 35, 38, 29, 31, 43, 38],
        aliases: &["Exod", "Ex", "Exo"],
    },
    BookEntry {
        name: "Leviticus",
        testament: Testament::Old,
        ordinal: 3,
        usfm: "LEV",
        chapters: &[17, 16, 17, 35, 19, 30, 38, 36, 24, 20, 47, 8, 59, 57, 33, 34, 16, 30, 37, 27, 24, 33, 44, 23, 55, 46, 34],
        aliases: &["Lev", "Le", "Lv"],
    },
    BookEntry {
        name: "Numbers",
        testament: Testament::Old,
        ordinal: 4,
        usfm: "NUM",
        chapters: &[54, 34, 51, 49, 31, 27, 89, 26, 23, 36, 35, 16, 33, 45, 41, 50, 13, 32, 22, 29, 35, 41, 30, 25, 18, 65, 23, 31, 40, 16, 54, 42, 56, 29, 34, 13],
        aliases: &["Num", "Nu", "Nm", "Nb"],
    },
    BookEntry {
        name: "Deuteronomy",
        testament: Testament::Old,
        ordinal: 5,
        usfm: "DEU",
        chapters: &[46, 37, 29, 49, 33, 25, 26, 20, 29, 22, 32, 32, 18, 29, 23, 22, 20, 22, 21, 20, 23, 30, 25, 22, 19, 19, 26, 68, 29, 20, 30, 52, 29, 12],
        aliases: &["Deut", "Dt", "De"],
    },
    BookEntry {
        name: "Joshua",
        testament: Testament::Old,
        ordinal: 6,
        usfm: "JOS",
        chapters: &[18, 24, 17, 24, 15, 27, 26, 35, 27, 43, 23, 24, 33, 15, 63, 10, 18, 28, 51, 9, 45, 34, 16, 33],
        aliases: &["Josh", "Jos", "Jsh"],
    },
    BookEntry {
        name: "Judges",
        testament: Testament::Old,
        ordinal: 7,
        usfm: "JDG",
        chapters: &[36, 23, 31, 24, 31, 40, 25, 35, 57, 18, 40, 15, 25, 20, 20, 31, 13, 31, 30, 48, 25],
        aliases: &["Judg", "Jdg", "Jg", "Jdgs"],
    },
    BookEntry {
        name: "Ruth",
        testament: Testament::Old,
        ordinal: 8,
        usfm: "RUT",
        chapters: &[22, 23, 18, 22],
        aliases: &["Rth", "Ru"],
    },
    BookEntry {
        name: "1 Samuel",
        testament: Testament::Old,
        ordinal: 9,
        usfm: "1SA",
        chapters: &[28, 36, 21, 22, 12, 21, 17, 22, 27, 27, 15, 25, 23, 52, 35, 23, 58, 30, 24, 42, 15, 23, 29, 22, 44, 25, 12, 25, 11, 31, 13],
        aliases: &["1 Sam", "1 Sm", "1Sa", "1S", "I Sa", "1 S", "I Sam", "1Sam", "I Samuel", "1Samuel"],
    },
    BookEntry {
        name: "2 Samuel",
        testament: Testament::Old,
        ordinal: 10,
        usfm: "2SA",
        chapters: &[27, 32, 39, 12, 25, 23, 29, 18, 13, 19, 27, 31, 39, 33, 37, 23, 29, 33, 43, 26, 22, 51, 39, 25],
        aliases: &["2 Sam", "2 Sm", "2Sa", "2S", "II Sa", "2 S", "II Sam", "2Sam", "II Samuel", "2Samuel"],
    },
    BookEntry {
        name: "1 Kings",
        testament: Testament::Old,
        ordinal: 11,
        usfm: "1KI",
        chapters: &[53, 46, 28, 34, 18, 38, 51, 66, 28, 29, 43, 33, 34, 31, 34, 34, 24, 46, 21, 43, 29, 53],
        aliases: &["1 Kgs", "1 Ki", "1K", "1Ki", "I Ki", "1Ki", "I Kings", "1Kings", "1st Kgs", "1st Kings"],
    },
    BookEntry {
        name: "2 Kings",
        testament: Testament::Old,
        ordinal: 12,
        usfm: "2KI",
        chapters: &[18, 25, 27, 44, 27, 33, 20, 29, 37, 36, 21, 21, 25, 29, 38, 20, 41, 37, 37, 21, 26, 20, 37, 20, 30],
        aliases: &["2 Kgs", "2 Ki", "2K", "2Ki", "II Ki", "2Ki", "II Kings", "2Kings", "2nd Kgs", "2nd Kings"],
    },
    BookEntry {
        name: "1 Chronicles",
        testament: Testament::Old,
        ordinal: 13,
        usfm: "1CH",
        chapters: &[54, 55, 24, 43, 26, 81, 40, 40, 44, 14, 47, 40, 14, 17, 29, 43, 27, 17, 19, 8, 30, 19, 32, 31, 31, 32, 34, 21, 30],
        aliases: &["1 Chron", "1 Ch", "1Ch", "I Ch", "I Chr", "1Chr", "1Chron", "I Chron", "1Chron"],
    },
    BookEntry {
        name: "2 Chronicles",
        testament: Testament::Old,
        ordinal: 14,
        usfm: "2CH",
        chapters: &[17, 18, 17, 22, 14, 42, 22, 18, 31, 19, 23, 16, 22, 15, 19, 14, 19, 34, 11, 37, 20, 12, 21, 27, 28, 23, 9, 27, 36, 27, 21, 33, 25, 33, 27, 23],
        aliases: &["2 Chron", "2 Ch", "2Ch", "II Ch", "II Chr", "2Chr", "2Chron", "II Chron", "2Chron"],
    },
    BookEntry {
        name: "Ezra",
        testament: Testament::Old,
        ordinal: 15,
        usfm: "EZR",
        chapters: &[11, 70, 13, 24, 17, 22, 28, 36, 15, 44],
        aliases: &["Ezr", "Ez"],
    },
    BookEntry {
        name: "Nehemiah",
        testament: Testament::Old,
        ordinal: 16,
        usfm: "NEH",
        chapters: &[11, 20, 32, 23, 19, 19, 73, 18, 38, 39, 36, 47, 31],
        aliases: &["Neh", "Ne"],
    },
    BookEntry {
        name: "Esther",
        testament: Testament::Old,
        ordinal: 17,
        usfm: "EST",
        chapters: &[22, 23, 15, 17, 14, 14, 10, 17, 32, 3],
        aliases: &["Esth", "Est", "Es"],
    },
    BookEntry {
        name: "Job",
        testament: Testament::Old,
        ordinal: 18,
        usfm: "JOB",
        chapters: &[22, 13, 26, 21, 27, 30, 21, 22, 35, 22, 20, 25, 28, 22, 35, 22, 16, 21, 29, 29, 34, 30, 17, 25, 6, 14, 23, 28, 25, 31, 40, 22, 33, 37, 16, 33, 24, 41, 30, 24, 34, 17],
        aliases: &["Jb"],
    },
    BookEntry {
        name: "Psalms",
        testament: Testament::Old,
        ordinal: 19,
        usfm: "PSA",
        chapters: &[6, 12, 8, 8, 12, 10, 17, 9, 20, 18, 7, 8, 6, 7, 5, 11, 15, 50, 14, 9, 13, 31, 6, 10, 22, 12, 14, 9, 11, 12, 24, 11, 22, 22, 28, 12, 40, 22, 13, 17, 13, 11, 5, 26, 17, 11, 9, 14, 20, 23, 19, 9, 6, 7, 23, 13, 11, 11, 17, 12, 8, 12, 11, 10, 13, 20, 7, 35, 36, 5, 24, 20, 28, 23, 10, 12, 20, 72, 13, 19, 16, 8, 18, 12, 13, 17, 7, 18, 52, 17, 16, 15, 5, 23, 11, 13, 12, 9, 9, 5, 8, 28, 22, 35, 45, 48, 43, 13, 31, 7, 10, 10, 9, 8, 18, 19, 2, 29, 176, 7, 8, 9, 4, 8, 5, 6, 5, 6, 8, 8, 3, 18, 3, 3, 21, 26, 9, 8, 24, 13, 10, 7, 12, 15, 21, 10, 20, 14, 9, 6],
        aliases: &["Ps", "Psalm", "Pslm", "Psa", "Psm", "Pss"],
    },
    BookEntry {
        name: "Proverbs",
        testament: Testament::Old,
        ordinal: 20,
        usfm: "PRO",
        chapters: &[33, 22, 35, 27, 23, 35, 27, 36, 18, 32, 31, 28, 25, 35, 33, 33, 28, 24, 29, 30, 31, 29, 35, 34, 28, 28, 27, 28, 27, 33, 31],
        aliases: &["Prov", "Pro", "Prv", "Pr"],
    },
    BookEntry {
        name: "Ecclesiastes",
        testament: Testament::Old,
        ordinal: 21,
        usfm: "ECC",
        chapters: &[18, 26, 22, 16, 20, 12, 29, 17, 18, 20, 10, 14],
        aliases: &["Eccles", "Eccle", "Ecc", "Ec", "Qoh"],
    },
    BookEntry {
        name: "Song of Solomon",
        testament: Testament::Old,
        ordinal: 22,
        usfm: "SNG",
        chapters: &[17, 17, 11, 16, 16, 13, 13, 14],
        aliases: &["Song", "Song of Songs", "SOS", "So", "Canticle of Canticles", "Canticles", "Cant"],
    },
    BookEntry {
        name: "Isaiah",
        testament: Testament::Old,
        ordinal: 23,
        usfm: "ISA",
        chapters: &[31, 22, 26, 6, 30, 13, 25, 22, 21, 34, 16, 6, 22, 32, 9, 14, 14, 7, 25, 6, 17, 25, 18, 23, 12, 21, 13, 29, 24, 33, 9, 20, 24, 17, 10, 22, 38, 22, 8, 31, 29, 25, 28, 28, 25, 13, 15, 22, 26, 11, 23, 15, 12, 17, 13, 12, 21, 14, 21, 22, 11, 12, 19, 12, 25, 24],
        aliases: &["Isa", "Is"],
    },
    BookEntry {
        name: "Jeremiah",
        testament: Testament::Old,
        ordinal: 24,
        usfm: "JER",
        chapters: &[19, 37, 25, 31, 31, 30, 34, 22, 26, 25, 23, 17, 27, 22, 21, 21, 27, 23, 15, 18, 14, 30, 40, 10, 38, 24, 22, 17, 32, 24, 40, 44, 26, 22, 19, 32, 21, 28, 18, 16, 18, 22, 13, 30, 5, 28, 7, 47, 39, 46, 64, 34],
        aliases: &["Jer", "Je", "Jr"],
    },
    BookEntry {
        name: "Lamentations",
        testament: Testament::Old,
        ordinal: 25,
        usfm: "LAM",
        chapters: &[22, 22, 66, 22, 22],
        aliases: &["Lam", "La"],
    },
    BookEntry {
        name: "Ezekiel",
        testament: Testament::Old,
        ordinal: 26,
        usfm: "EZK",
        chapters: &[28, 10, 27, 17, 17, 14, 27, 18, 11, 22, 25, 28, 23, 23, 8, 63, 24, 32, 14, 49, 32, 31, 49, 27, 17, 21, 36, 26, 21, 26, 18, 32, 33, 31, 15, 38, 28, 23, 29, 49, 26, 20, 27, 31, 25, 24, 23, 35],
        aliases: &["Ezek", "Eze", "Ezk"],
    },
    BookEntry {
        name: "Daniel",
        testament: Testament::Old,
        ordinal: 27,
        usfm: "DAN",
        chapters: &[21, 49, 30, 37, 31, 28, 28, 27, 27, 21, 45, 13],
        aliases: &["Dan", "Da", "Dn"],
    },
    BookEntry {
        name: "Hosea",
        testament: Testament::Old,
        ordinal: 28,
        usfm: "HOS",
        chapters: &[11, 23, 5, 19, 15, 11, 16, 14, 17, 15, 12, 14, 16, 9],
        aliases: &["Hos", "Ho"],
    },
    BookEntry {
        name: "Joel",
        testament: Testament::Old,
        ordinal: 29,
        usfm: "JOL",
        chapters: &[20, 32, 21],
        aliases: &["Joe", "Jl"],
    },
    BookEntry {
        name: "Amos",
        testament: Testament::Old,
        ordinal: 30,
        usfm: "AMO",
        chapters: &[15, 16, 15, 13, 27, 14, 17, 14, 15],
        aliases: &["Am"],
    },
    BookEntry {
        name: "Obadiah",
        testament: Testament::Old,
        ordinal: 31,
        usfm: "OBA",
        chapters: &[21],
        aliases: &["Obad", "Ob"],
    },
    BookEntry {
        name: "Jonah",
        testament: Testament::Old,
        ordinal: 32,
        usfm: "JON",
        chapters: &[17, 10, 10, 11],
        aliases: &["Jnh", "Jon"],
    },
    BookEntry {
        name: "Micah",
        testament: Testament::Old,
        ordinal: 33,
        usfm: "MIC",
        chapters: &[16, 13, 12, 13, 15, 16, 20],
        aliases: &["Mic", "Mc"],
    },
    BookEntry {
        name: "Nahum",
        testament: Testament::Old,
        ordinal: 34,
        usfm: "NAM",
        chapters: &[15, 13, 19],
        aliases: &["Nah", "Na"],
    },
    BookEntry {
        name: "Habakkuk",
        testament: Testament::Old,
        ordinal: 35,
        usfm: "HAB",
        chapters: &[17, 20, 19],
        aliases: &["Hab", "Hb"],
    },
    BookEntry {
        name: "Zephaniah",
        testament: Testament::Old,
        ordinal: 36,
        usfm: "ZEP",
        chapters: &[18, 15, 20],
        aliases: &["Zeph", "Zep", "Zp"],
    },
    BookEntry {
        name: "Haggai",
        testament: Testament::Old,
        ordinal: 37,
        usfm: "HAG",
        chapters: &[15, 23],
        aliases: &["Hag", "Hg"],
    },
    BookEntry {
        name: "Zechariah",
        testament: Testament::Old,
        ordinal: 38,
        usfm: "ZEC",
        chapters: &[21, 13, 10, 14, 11, 15, 14, 23, 17, 12, 17, 14, 9, 21],
        aliases: &["Zech", "Zec", "Zc"],
    },
    BookEntry {
        name: "Malachi",
        testament: Testament::Old,
        ordinal: 39,
        usfm: "MAL",
        chapters: &[14, 17, 18, 6],
        aliases: &["Mal", "Ml"],
    },
    BookEntry {
        name: "Matthew",
        testament: Testament::New,
        ordinal: 40,
        usfm: "MAT",
        chapters: &[25, 23, 17, 25, 48, 34, 29, 34, 38, 42, 30, 50, 58, 36, 39, 28, 27, 35, 30, 34, 46, 46, 39, 51, 46, 75, 66, 20],
        aliases: &["Matt", "Mat", "Mt"],
    },
    BookEntry {
        name: "Mark",
        testament: Testament::New,
        ordinal: 41,
        usfm: "MRK",
        chapters: &[45, 28, 35, 41, 43, 56, 37, 38, 50, 52, 33, 44, 37, 72, 47, 20],
        aliases: &["Mrk", "Mar", "Mk", "Mr"],
    },
    BookEntry {
        name: "Luke",
        testament: Testament::New,
        ordinal: 42,
        usfm: "LUK",
        chapters: &[80, 52, 38, 44, 39, 49, 50, 56, 62, 42, 54, 59, 35, 35, 32, 31, 37, 43, 48, 47, 38, 71, 56, 53],
        aliases: &["Luk", "Lk"],
    },
    BookEntry {
        name: "John",
        testament: Testament::New,
        ordinal: 43,
        usfm: "JHN",
        chapters: &[51, 25, 36, 54, 47, 71, 53, 59, 41, 42, 57, 50, 38, 31, 27, 33, 26, 40, 42, 31, 25],
        aliases: &["Jhn", "Joh", "Jn"],
    },
    BookEntry {
        name: "Acts",
        testament: Testament::New,
        ordinal: 44,
        usfm: "ACT",
        chapters: &[26, 47, 26, 37, 42, 15, 60, 40, 43, 48, 30, 25, 52, 28, 41, 40, 34, 28, 41, 38, 40, 30, 35, 27, 27, 32, 44, 31],
        aliases: &["Act", "Ac"],
    },
    BookEntry {
        name: "Romans",
        testament: Testament::New,
        ordinal: 45,
        usfm: "ROM",
        chapters: &[32, 29, 31, 25, 21, 23, 25, 39, 33, 21, 36, 21, 14, 23, 33, 27],
        aliases: &["Rom", "Ro", "Rm"],
    },
    BookEntry {
        name: "1 Corinthians",
        testament: Testament::New,
        ordinal: 46,
        usfm: "1CO",
        chapters: &[31, 16, 23, 21, 13, 20, 40, 13, 27, 33, 34, 31, 13, 40, 58, 24],
        aliases: &["1 Cor", "1 Co", "1Co", "I Co", "I Cor", "1Cor", "I Corinthians", "1Corinthians", "1st Corinthians"],
    },
    BookEntry {
        name: "2 Corinthians",
        testament: Testament::New,
        ordinal: 47,
        usfm: "2CO",
        chapters: &[24, 17, 18, 18, 21, 18, 16, 24, 15, 18, 33, 21, 14],
        aliases: &["2 Cor", "2 Co", "2Co", "II Co", "II Cor", "2Cor", "II Corinthians", "2Corinthians", "2nd Corinthians"],
    },
    BookEntry {
        name: "Galatians",
        testament: Testament::New,
        ordinal: 48,
        usfm: "GAL",
        chapters: &[24, 21, 29, 31, 26, 18],
        aliases: &["Gal", "Ga"],
    },
    BookEntry {
        name: "Ephesians",
        testament: Testament::New,
        ordinal: 49,
        usfm: "EPH",
        chapters: &[23, 22, 21, 32, 33, 24],
        aliases: &["Eph", "Ephes"],
    },
    BookEntry {
        name: "Philippians",
        testament: Testament::New,
        ordinal: 50,
        usfm: "PHP",
        chapters: &[30, 30, 21, 23],
        aliases: &["Phil", "Php", "Pp"],
    },
    BookEntry {
        name: "Colossians",
        testament: Testament::New,
        ordinal: 51,
        usfm: "COL",
        chapters: &[29, 23, 25, 18],
        aliases: &["Col", "Co"],
    },
    BookEntry {
        name: "1 Thessalonians",
        testament: Testament::New,
        ordinal: 52,
        usfm: "1TH",
        chapters: &[10, 20, 13, 18, 28],
        aliases: &["1 Thess", "1 Th", "1Th", "I Th", "I Thes", "I Thess", "1Thess", "1Thes", "I Thessalonians", "1Thessalonians", "1st Thessalonians"],
    },
    BookEntry {
        name: "2 Thessalonians",
        testament: Testament::New,
        ordinal: 53,
        usfm: "2TH",
        chapters: &[12, 17, 18],
        aliases: &["2 Thess", "2 Th", "2Th", "II Th", "II Thes", "II Thess", "2Thess", "2Thes", "II Thessalonians", "2Thessalonians", "2nd Thessalonians"],
    },
    BookEntry {
        name: "1 Timothy",
        testament: Testament::New,
        ordinal: 54,
        usfm: "1TI",
        chapters: &[20, 15, 16, 16, 25, 21],
        aliases: &["1 Tim", "1 Ti", "1Ti", "I Ti", "I Tim", "1Tim", "I Timothy", "1Timothy", "1st Timothy"],
    },
    BookEntry {
        name: "2 Timothy",
        testament: Testament::New,
        ordinal: 55,
        usfm: "2TI",
        chapters: &[18, 26, 17, 22],
        aliases: &["2 Tim", "2 Ti", "2Ti", "II Ti", "II Tim", "2Tim", "II Timothy", "2Timothy", "2nd Timothy"],
    },
    BookEntry {
        name: "Titus",
        testament: Testament::New,
        ordinal: 56,
        usfm: "TIT",
        chapters: &[16, 15, 15],
        aliases: &["Tit", "Ti"],
    },
    BookEntry {
        name: "Philemon",
        testament: Testament::New,
        ordinal: 57,
        usfm: "PHM",
        chapters: &[25],
        aliases: &["Philem", "Phm", "Pm"],
    },
    BookEntry {
        name: "Hebrews",
        testament: Testament::New,
        ordinal: 58,
        usfm: "HEB",
        chapters: &[14, 18, 19, 16, 14, 20, 28, 13, 28, 39, 40, 29, 25],
        aliases: &["Heb"],
    },
    BookEntry {
        name: "James",
        testament: Testament::New,
        ordinal: 59,
        usfm: "JAS",
        chapters: &[27, 26, 18, 17, 20],
        aliases: &["Jas", "Jm"],
    },
    BookEntry {
        name: "1 Peter",
        testament: Testament::New,
        ordinal: 60,
        usfm: "1PE",
        chapters: &[25, 25, 22, 19, 14],
        aliases: &["1 Pet", "1 Pe", "1P", "I Pe", "I Pet", "1Pet", "I Pt", "I Peter", "1Peter", "1st Peter"],
    },
    BookEntry {
        name: "2 Peter",
        testament: Testament::New,
        ordinal: 61,
        usfm: "2PE",
        chapters: &[21, 22, 18],
        aliases: &["2 Pet", "2 Pe", "2P", "II Pe", "II Pet", "2Pet", "II Pt", "II Peter", "2Peter", "2nd Peter"],
    },
    BookEntry {
        name: "1 John",
        testament: Testament::New,
        ordinal: 62,
        usfm: "1JN",
        chapters: &[10, 29, 24, 21, 21],
        aliases: &["1 Jn", "1J", "I Jn", "I Jo", "I Joh", "I John", "1John", "1st John"],
    },
    BookEntry {
        name: "2 John",
        testament: Testament::New,
        ordinal: 63,
        usfm: "2JN",
        chapters: &[13],
        aliases: &["2 Jn", "2J", "II Jn", "II Jo", "II Joh", "II John", "2John", "2nd John"],
    },
    BookEntry {
        name: "3 John",
        testament: Testament::New,
        ordinal: 64,
        usfm: "3JN",
        chapters: &[14],
        aliases: &["3 Jn", "3J", "III Jn", "III Jo", "III Joh", "III John", "3John", "3rd John"],
    },
    BookEntry {
        name: "Jude",
        testament: Testament::New,
        ordinal: 65,
        usfm: "JUD",
        chapters: &[25],
        aliases: &["Jud", "Jd"],
    },
    BookEntry {
        name: "Revelation",
        testament: Testament::New,
        ordinal: 66,
        usfm: "REV",
        chapters: &[20, 29, 22, 11, 14, 17, 17, 13, 21, 11, 19, 17, 18, 20, 8, 21, 18, 24, 21, 15, 27, 21],
        aliases: &["Rev", "Re", "The Revelation"],
    },
];
