// Static scene and ambient-sound catalogs.
//
// Both tables are defined once at load time and never mutated. Scenes
// reference sounds through `sound_id`; several scenes may share one sound
// (one ambient "group" cycled manually with left/right).

use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug)]
pub struct Scene {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub mobile_image: Option<&'static str>,
    pub video: Option<&'static str>,
    pub sound_id: &'static str,
    /// CSS object-position hint for the presentation layer.
    pub object_position: Option<&'static str>,
}

#[derive(Clone, Copy, Debug)]
pub struct AmbientSound {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// `None` only for the `"none"` sentinel.
    pub src: Option<&'static str>,
    pub category: &'static str,
}

/// Sentinel id meaning silence.
pub const SOUND_NONE: &str = "none";

pub const AMBIENT_SOUNDS: &[AmbientSound] = &[
    AmbientSound {
        id: SOUND_NONE,
        name: "None",
        description: "Silence",
        src: None,
        category: "control",
    },
    AmbientSound {
        id: "rain-light",
        name: "Light Rain",
        description: "Gentle rain on window",
        src: Some("/audio/ambient/rain-light.mp3"),
        category: "weather",
    },
    AmbientSound {
        id: "rain-heavy",
        name: "Thunderstorm",
        description: "Heavy rain with thunder",
        src: Some("/audio/ambient/rain-heavy.mp3"),
        category: "weather",
    },
    AmbientSound {
        id: "ocean-waves",
        name: "Ocean Waves",
        description: "Rhythmic waves on beach",
        src: Some("/audio/ambient/ocean-waves.mp3"),
        category: "nature",
    },
    AmbientSound {
        id: "stream",
        name: "Stream",
        description: "Flowing water",
        src: Some("/audio/ambient/stream.mp3"),
        category: "nature",
    },
    AmbientSound {
        id: "waterfall",
        name: "Waterfall",
        description: "Cascading water",
        src: Some("/audio/ambient/waterfall.mp3"),
        category: "nature",
    },
    AmbientSound {
        id: "fireplace",
        name: "Fireplace",
        description: "Crackling fire",
        src: Some("/audio/ambient/fireplace.mp3"),
        category: "cozy",
    },
    AmbientSound {
        id: "wind",
        name: "Wind",
        description: "Gentle breeze",
        src: Some("/audio/ambient/wind.mp3"),
        category: "nature",
    },
    AmbientSound {
        id: "night",
        name: "Night",
        description: "Nighttime ambience",
        src: Some("/audio/ambient/night.mp3"),
        category: "nature",
    },
    AmbientSound {
        id: "coffee-shop",
        name: "Coffee Shop",
        description: "Cafe chatter and dishes",
        src: Some("/audio/ambient/coffee-shop.mp3"),
        category: "urban",
    },
    AmbientSound {
        id: "scifi-ambience",
        name: "Sci-Fi",
        description: "Futuristic ambience",
        src: Some("/audio/ambient/scifi-ambience.mp3"),
        category: "atmospheric",
    },
    AmbientSound {
        id: "handpan",
        name: "Handpan",
        description: "Melodic handpan tones",
        src: Some("/audio/ambient/handpan.mp3"),
        category: "musical",
    },
    AmbientSound {
        id: "white-noise",
        name: "White Noise",
        description: "Pure white noise",
        src: Some("/audio/ambient/white-noise.mp3"),
        category: "focus",
    },
];

macro_rules! scene {
    ($id:literal, $name:literal, $sound:literal) => {
        Scene {
            id: $id,
            name: $name,
            image: concat!("/images/scenes/", $id, ".jpg"),
            mobile_image: None,
            video: None,
            sound_id: $sound,
            object_position: None,
        }
    };
}

pub const SCENES: &[Scene] = &[
    Scene {
        id: "rain-1",
        name: "Rainy Window",
        image: "/images/scenes/rain-1.jpg",
        mobile_image: Some("/images/scenes/mobile/rain-1.jpg"),
        video: Some("/videos/scenes/rain-1.mp4"),
        sound_id: "rain-light",
        object_position: None,
    },
    Scene {
        id: "rain-2",
        name: "Forest Rain",
        image: "/images/scenes/rain-2.jpg",
        mobile_image: None,
        video: Some("/videos/scenes/rain-2.mp4"),
        sound_id: "rain-light",
        object_position: Some("center 30%"),
    },
    scene!("rain-3", "City Rain", "rain-heavy"),
    Scene {
        id: "rain-4",
        name: "Storm Cabin",
        image: "/images/scenes/rain-4.jpg",
        mobile_image: Some("/images/scenes/mobile/rain-4.jpg"),
        video: None,
        sound_id: "rain-heavy",
        object_position: None,
    },
    Scene {
        id: "ocean-1",
        name: "Open Shore",
        image: "/images/scenes/ocean-1.jpg",
        mobile_image: None,
        video: Some("/videos/scenes/ocean-1.mp4"),
        sound_id: "ocean-waves",
        object_position: None,
    },
    scene!("ocean-2", "Dusk Tide", "ocean-waves"),
    scene!("stream-1", "Mountain Stream", "stream"),
    scene!("waterfall-1", "Hidden Falls", "waterfall"),
    Scene {
        id: "fireplace-1",
        name: "Hearth",
        image: "/images/scenes/fireplace-1.jpg",
        mobile_image: Some("/images/scenes/mobile/fireplace-1.jpg"),
        video: Some("/videos/scenes/fireplace-1.mp4"),
        sound_id: "fireplace",
        object_position: None,
    },
    scene!("fireplace-2", "Winter Lodge", "fireplace"),
    scene!("wind-1", "Grass Plain", "wind"),
    Scene {
        id: "wind-2",
        name: "Highlands",
        image: "/images/scenes/wind-2.jpg",
        mobile_image: None,
        video: None,
        sound_id: "wind",
        object_position: Some("center 60%"),
    },
    scene!("night-1", "Starfield", "night"),
    scene!("night-2", "Moonlit Lake", "night"),
    scene!("night-3", "Summer Porch", "night"),
    Scene {
        id: "coffee-1",
        name: "Corner Cafe",
        image: "/images/scenes/coffee-1.jpg",
        mobile_image: None,
        video: Some("/videos/scenes/coffee-1.mp4"),
        sound_id: "coffee-shop",
        object_position: None,
    },
    scene!("coffee-2", "Rainy Cafe", "coffee-shop"),
    scene!("scifi-1", "Orbit Station", "scifi-ambience"),
    scene!("scifi-2", "Neon District", "scifi-ambience"),
    scene!("handpan-1", "Desert Dawn", "handpan"),
    scene!("white-noise-1", "Fog Bank", "white-noise"),
];

/// Look up a sound descriptor by id. Unknown ids return `None`; callers
/// that need a total function fall back to [`none_sound`].
pub fn ambient_by_id(id: &str) -> Option<&'static AmbientSound> {
    AMBIENT_SOUNDS.iter().find(|s| s.id == id)
}

/// The `"none"` sentinel descriptor.
pub fn none_sound() -> &'static AmbientSound {
    &AMBIENT_SOUNDS[0]
}

/// Group the selectable sounds by category, in catalog order.
pub fn ambients_by_category() -> FnvHashMap<&'static str, Vec<&'static AmbientSound>> {
    let mut grouped: FnvHashMap<&'static str, Vec<&'static AmbientSound>> = FnvHashMap::default();
    for sound in AMBIENT_SOUNDS {
        grouped.entry(sound.category).or_default().push(sound);
    }
    grouped
}

/// First scene whose sound matches, in catalog order.
pub fn scene_index_for_sound(sound_id: &str) -> Option<usize> {
    SCENES.iter().position(|s| s.sound_id == sound_id)
}

/// All scene indices belonging to one sound group, in catalog order.
pub fn scene_indices_for_sound(sound_id: &str) -> SmallVec<[usize; 4]> {
    SCENES
        .iter()
        .enumerate()
        .filter(|(_, s)| s.sound_id == sound_id)
        .map(|(i, _)| i)
        .collect()
}

pub fn scene_at(index: usize) -> Option<&'static Scene> {
    SCENES.get(index)
}

pub fn scene_count() -> usize {
    SCENES.len()
}
