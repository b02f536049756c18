//! Named game assets and the pixel sizes the simulation is tuned against.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureAsset {
    Background,
    PlayButton,
    Title,
    GameOver,
    Ground,
    TopTube,
    BottomTube,
    /// Horizontal strip of player animation frames.
    BirdStrip,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundAsset {
    Flap,
    Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MusicAsset {
    Menu,
    Gameplay,
    GameOver,
}

impl TextureAsset {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Background => "bg.png",
            Self::PlayButton => "playbtn.png",
            Self::Title => "title.png",
            Self::GameOver => "gameover.png",
            Self::Ground => "ground.png",
            Self::TopTube => "toptube.png",
            Self::BottomTube => "bottomtube.png",
            Self::BirdStrip => "birdanimation.png",
        }
    }

    /// Width and height in pixels.
    pub fn size(self) -> (u32, u32) {
        match self {
            Self::Background => (272, 512),
            Self::PlayButton => (104, 58),
            Self::Title => (178, 48),
            Self::GameOver => (192, 42),
            Self::Ground => (336, 112),
            Self::TopTube => (52, 320),
            Self::BottomTube => (52, 320),
            Self::BirdStrip => (102, 24),
        }
    }
}

impl SoundAsset {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Flap => "sfx_wing.ogg",
            Self::Point => "point.mp3",
        }
    }
}

impl MusicAsset {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Menu => "menumusic.mp3",
            Self::Gameplay => "gameplaymusic.mp3",
            Self::GameOver => "gameovermusic.mp3",
        }
    }

    /// Short label for now-playing indicators.
    pub fn title(self) -> &'static str {
        match self {
            Self::Menu => "menu theme",
            Self::Gameplay => "flight theme",
            Self::GameOver => "game over theme",
        }
    }
}
