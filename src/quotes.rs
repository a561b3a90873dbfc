//! The quote table and random selection over it.

use failure::{format_err, Error};
use lazy_static::lazy_static;
use rand::{seq::SliceRandom, Rng};

/// Clip played after every quote.
pub const AUDIO_URL: &str =
    "https://s3.amazonaws.com/silver-giggle-bucket/Bpm095_F%23m_SpaceWasteland_Pad_firstfile.mp3";

struct Quote {
    voice: &'static str,
    text: &'static str,
}

impl Quote {
    fn to_ssml(&self) -> String {
        format!(
            "<voice name=\"{}\">{}</voice><audio src='{}'/>",
            self.voice, self.text, AUDIO_URL
        )
    }
}

const QUOTES: [Quote; 16] = [
    Quote {
        voice: "Joey",
        text: "Just because something doesn’t do what you planned it to do, doesn’t mean it’s useless. By Thomas Edison.",
    },
    Quote {
        voice: "Matthew",
        text: "One machine can do the work of fifty ordinary men. No machine can do the work of one extraordinary man. By Elbert Hubbard.",
    },
    Quote {
        voice: "Brian",
        text: "Tell me and I forget. Teach me and I remember. Involve me and I learn. By Benjamin Franklin.",
    },
    Quote {
        voice: "Matthew",
        text: "It does not matter how slowly you go as long as you do not stop. By Confucius.",
    },
    Quote {
        voice: "Kendra",
        text: "Set your goals high, and dont stop till you get there. By Bo Jackson.",
    },
    Quote {
        voice: "Joey",
        text: "Our greatest weakness lies in giving up. The most certain way to succeed is always to try just one more time. By Thomas Edison.",
    },
    Quote {
        voice: "Matthew",
        text: "If you can dream it, you can do it. By Walt Disney.",
    },
    Quote {
        voice: "Brian",
        text: "You cannot cross the sea merely by standing and staring at the water. By Rabindranath Tagore.",
    },
    Quote {
        voice: "Joey",
        text: "If you want to conquer fear, dont sit at home and think about it. Go out and get busy. By Dale Carnegie.",
    },
    Quote {
        voice: "Matthew",
        text: "The secret of getting ahead is getting started. By Mark Twain.",
    },
    Quote {
        voice: "Brian",
        text: "Without hard work, nothing grows but weeds. By Gordon B. Hinckley.",
    },
    Quote {
        voice: "Joey",
        text: "Quality is not an act, it is a habit. By Aristotle.",
    },
    Quote {
        voice: "Matthew",
        text: "Start where you are. Use what you have. Do what you can. By Arthur Ashe.",
    },
    Quote {
        voice: "Brian",
        text: "What you do today can improve all your tomorrows. By Ralph Marston.",
    },
    Quote {
        voice: "Joey",
        text: "Dont watch the Clock. Do what it does. Keep going. By Sam Levenson.",
    },
    Quote {
        voice: "Matthew",
        text: "Aim for the moon. If you miss, you may hit a star. By W. Clement Stone.",
    },
];

lazy_static! {
    /// Every quote rendered to SSML once, at first use.
    pub static ref QUOTE_TABLE: Vec<String> = QUOTES.iter().map(Quote::to_ssml).collect();
}

/// Picks a quote uniformly at random from the table.
pub fn select_quote() -> Result<&'static str, Error> {
    let table: &'static [String] = &QUOTE_TABLE;
    select_from(table, &mut rand::thread_rng())
}

pub fn select_from<'a, R: Rng + ?Sized>(
    table: &'a [String],
    rng: &mut R,
) -> Result<&'a str, Error> {
    table
        .choose(rng)
        .map(String::as_str)
        .ok_or_else(|| format_err!("Quote table is empty"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn table_has_sixteen_voiced_quotes() {
        assert_eq!(QUOTE_TABLE.len(), 16);
        for quote in QUOTE_TABLE.iter() {
            assert!(quote.starts_with("<voice name=\""));
            assert!(quote.ends_with(&format!("</voice><audio src='{}'/>", AUDIO_URL)));
        }
    }

    #[test]
    fn quote_wording_is_kept_verbatim() {
        let texts: Vec<&str> = QUOTES.iter().map(|q| q.text).collect();
        assert!(texts.contains(
            &"Just because something doesn’t do what you planned it to do, doesn’t mean it’s useless. By Thomas Edison."
        ));
        assert!(texts.contains(&"Set your goals high, and dont stop till you get there. By Bo Jackson."));
        assert!(texts.contains(&"Dont watch the Clock. Do what it does. Keep going. By Sam Levenson."));
    }

    #[test]
    fn selected_quote_comes_from_table() {
        let quote = select_quote().unwrap();
        assert!(QUOTE_TABLE.iter().any(|q| q == quote));
    }

    #[test]
    fn empty_table_is_an_error() {
        let empty: Vec<String> = Vec::new();
        let err = select_from(&empty, &mut rand::thread_rng()).unwrap_err();
        assert_eq!(err.to_string(), "Quote table is empty");
    }

    #[test]
    fn single_entry_table_always_returns_it() {
        let table = vec!["only".to_owned()];
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(select_from(&table, &mut rng).unwrap(), "only");
        }
    }

    #[test]
    fn selection_is_roughly_uniform() {
        let table: &[String] = &QUOTE_TABLE;
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut counts = vec![0usize; table.len()];

        for _ in 0..1600 {
            let quote = select_from(table, &mut rng).unwrap();
            let index = table.iter().position(|q| q == quote).unwrap();
            counts[index] += 1;
        }

        // Expected 100 per entry; bounds sit about six standard deviations out.
        for (index, count) in counts.iter().enumerate() {
            assert!(
                *count >= 40 && *count <= 160,
                "quote {} selected {} times",
                index,
                count
            );
        }
    }
}
