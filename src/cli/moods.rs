use tabled::Table;

use crate::{mood::Mood, types::MoodProfileTableRow};

pub fn moods() {
    let rows: Vec<MoodProfileTableRow> = Mood::ALL
        .iter()
        .map(|mood| {
            let profile = mood.profile();
            MoodProfileTableRow {
                mood: mood.label().to_string(),
                valence: profile.valence,
                energy: profile.energy,
                playlist: mood.playlist_title(),
            }
        })
        .collect();

    println!("{}", Table::new(rows));
}
