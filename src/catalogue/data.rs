//! The fixed catalogue. Versioned with the binary; no file is read at
//! runtime.

use super::model::{Category, Section, Track};

/// Build the catalogue in its canonical order. Called once at startup.
pub fn load() -> Vec<Track> {
    vec![
        Track {
            id: "1",
            title: "Naa Ready",
            movie: "Leo",
            artist: "Thalapathy Vijay, Anirudh",
            music_director: "Anirudh Ravichander",
            year: 2023,
            category: Category::Mass,
            section: Section::Latest,
            image_url: "https://picsum.photos/seed/leo/400/400",
            audio_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3",
            duration: "04:08",
        },
        Track {
            id: "2",
            title: "Aga Naga",
            movie: "Ponniyin Selvan 2",
            artist: "Shakthisree Gopalan",
            music_director: "A.R. Rahman",
            year: 2023,
            category: Category::Melody,
            section: Section::Latest,
            image_url: "https://picsum.photos/seed/ps2/400/400",
            audio_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3",
            duration: "03:52",
        },
        Track {
            id: "3",
            title: "Kaavaalaa",
            movie: "Jailer",
            artist: "Shilpa Rao, Anirudh",
            music_director: "Anirudh Ravichander",
            year: 2023,
            category: Category::Folk,
            section: Section::Trending,
            image_url: "https://picsum.photos/seed/jailer/400/400",
            audio_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-3.mp3",
            duration: "03:10",
        },
        Track {
            id: "4",
            title: "Raja Raja Chozhan",
            movie: "Rettai Vaal Kuruvi",
            artist: "K.J. Yesudas",
            music_director: "Ilaiyaraaja",
            year: 1987,
            category: Category::Melody,
            section: Section::Classic,
            image_url: "https://picsum.photos/seed/classic1/400/400",
            audio_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-4.mp3",
            duration: "04:22",
        },
        Track {
            id: "5",
            title: "Munbe Vaa",
            movie: "Sillunu Oru Kaadhal",
            artist: "Shreya Ghoshal, Naresh Iyer",
            music_director: "A.R. Rahman",
            year: 2006,
            category: Category::Love,
            section: Section::Classic,
            image_url: "https://picsum.photos/seed/sok/400/400",
            audio_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-5.mp3",
            duration: "05:59",
        },
        Track {
            id: "6",
            title: "Rowdy Baby",
            movie: "Maari 2",
            artist: "Dhanush, Dhee",
            music_director: "Yuvan Shankar Raja",
            year: 2018,
            category: Category::Mass,
            section: Section::Trending,
            image_url: "https://picsum.photos/seed/maari2/400/400",
            audio_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-6.mp3",
            duration: "04:44",
        },
        Track {
            id: "7",
            title: "Enodu Nee Irundhal",
            movie: "I",
            artist: "Sid Sriram",
            music_director: "A.R. Rahman",
            year: 2015,
            category: Category::Love,
            section: Section::MovieWise,
            image_url: "https://picsum.photos/seed/imovie/400/400",
            audio_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-7.mp3",
            duration: "06:08",
        },
        Track {
            id: "8",
            title: "Pachai Nirame",
            movie: "Alaipayuthey",
            artist: "Hariharan",
            music_director: "A.R. Rahman",
            year: 2000,
            category: Category::Melody,
            section: Section::Classic,
            image_url: "https://picsum.photos/seed/alai/400/400",
            audio_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-8.mp3",
            duration: "05:48",
        },
    ]
}
