use std::time::Duration;

/// Site tuning constants.
///
/// Everything the grid and the loading gate need is supplied from here at
/// construction; the core modules carry no defaults of their own.

// Background grid
pub const GRID_SPACING: f64 = 30.0; // px between nodes
pub const GRID_MAX_OFFSET: f64 = 12.0; // px each dot is pulled toward the pointer
pub const DOT_RADIUS: f64 = 2.0;
pub const DOT_COLOR: &str = "#d0d0d0";
pub const BACKGROUND_COLOR: &str = "#f0f0f0"; // matches the body background

// Loading screen
pub const MINIMUM_LOADING_TIME: Duration = Duration::from_millis(2000);
pub const PHOTO_CYCLE_INTERVAL: Duration = Duration::from_millis(2500);
pub const PHOTO_FADE_DELAY: Duration = Duration::from_millis(300);
pub const LOADING_HARD_TIMEOUT: Duration = Duration::from_millis(5000);

// Fade styling applied by the image sink
pub const FADE_TRANSITION_CSS: &str = "opacity 0.3s ease, transform 0.3s ease";
pub const FADED_OUT_SCALE: &str = "scale(0.98)";

pub const LOADING_PHOTOS: &[&str] = &[
    "assets/loadingPhotos/breakaway 2.jpg",
    "assets/loadingPhotos/Collage 15.jpg",
    "assets/loadingPhotos/Collage 17.jpg",
    "assets/loadingPhotos/Collage 19.jpg",
    "assets/loadingPhotos/Collage 23.jpg",
    "assets/loadingPhotos/Collage 7.jpg",
    "assets/loadingPhotos/conclusion.jpg",
    "assets/loadingPhotos/landing-page-slides-photo-1.png",
    "assets/loadingPhotos/making maker.jpg",
    "assets/loadingPhotos/moments.jpg",
    "assets/loadingPhotos/preface.jpg",
    "assets/loadingPhotos/space.jpg",
    "assets/loadingPhotos/spread studio shot.jpg",
    "assets/loadingPhotos/table.jpg",
    "assets/loadingPhotos/tension.jpg",
];

pub const ROSTER_URL: &str = "data/graduates.json";

// Element ids
pub const BACKGROUND_CANVAS_ID: &str = "backgroundCanvas";
pub const LOADING_OVERLAY_ID: &str = "loadingOverlay";
pub const LOADING_IMAGE_ID: &str = "loadingImage";
pub const MAIN_CONTENT_ID: &str = "mainContent";
pub const HEADER_PLACEHOLDER_ID: &str = "header-placeholder";
pub const LOADING_HEADER_PLACEHOLDER_ID: &str = "loading-header-placeholder";
pub const FOOTER_PLACEHOLDER_ID: &str = "footer-placeholder";
pub const GRADUATES_GRID_ID: &str = "graduatesGrid";
pub const DESIGNER_NAME_ID: &str = "designerName";
pub const DESIGNER_BIO_ID: &str = "designerBio";
pub const OTHER_DESIGNERS_ID: &str = "otherDesignersList";
pub const PROJECT_PREVIEW_ID: &str = "projectPreview";
