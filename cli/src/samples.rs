//! Sample line-ups used by the `demo` command.

use bandroom_core::dates::PartialDate;
use bandroom_core::domain::{Band, Musician};
use chrono::NaiveDate;

fn ymd(y: i32, m: u32, d: u32) -> PartialDate {
  NaiveDate::from_ymd_opt(y, m, d).map(PartialDate::Exact).unwrap_or_default()
}

pub fn the_beatles() -> Band {
  Band::new(
    "The Beatles",
    [
      Musician::new("John Lennon").with_instrument("rhythm guitar").with_nationality("British").born(ymd(1940, 10, 9)),
      Musician::new("Paul McCartney").with_instrument("bass").with_nationality("British").born(ymd(1942, 6, 18)),
      Musician::new("George Harrison").with_instrument("lead guitar").with_nationality("British").born(ymd(1943, 2, 25)),
      Musician::new("Ringo Starr").with_instrument("drums").with_nationality("British").born(ymd(1940, 7, 7)),
    ],
    ymd(1962, 8, 18),
    Some(ymd(1970, 4, 10)),
  )
}

pub fn pink_floyd() -> Band {
  Band::new(
    "Pink Floyd",
    [
      Musician::new("Roger Waters").with_instrument("bass").born(ymd(1943, 9, 6)),
      Musician::new("Nick Mason").with_instrument("drums").born(ymd(1944, 1, 27)),
      Musician::new("Rick Wright").with_instrument("keyboards").born(ymd(1943, 7, 28)),
      Musician::new("David Gilmour").with_instrument("guitar").born(ymd(1946, 3, 6)),
    ],
    ymd(1965, 2, 12),
    Some(ymd(1995, 3, 14)),
  )
}
