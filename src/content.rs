//! Copy and image paths shown on the site
//!
//! Image paths are relative to the CDN upload root from the settings.

pub const BRAND_NAME: &str = "Moments by Sunny";
pub const BRAND_TAGLINE: &str = "Capturing emotions in every frame";
pub const THEME_COLOR: &str = "#C7A869";

pub const HERO_IMAGE: &str = "v1755440876/main-min_e83hkb.jpg";
pub const ABOUT_IMAGE: &str = "v1755440869/aboutme-min_h3pglb.jpg";
pub const BOOKING_BACKGROUND: &str =
    "v1755977327/98bc3f56-1556-49f0-8cbb-b1caf9dcd077_jtbb86.png";
pub const FAVICON: &str = "v1755974985/8b5e04ec-5655-42a9-97ed-d2cc71e74ab3_atmweo.png";

pub struct ContactDetails {
    pub email: &'static str,
    pub phone_label: &'static str,
    pub phone_href: &'static str,
    pub instagram: &'static str,
    pub facebook: &'static str,
}

pub static CONTACT: ContactDetails = ContactDetails {
    email: "contact@momentsbysunny.com",
    phone_label: "+1 469 431 2333",
    phone_href: "tel:+14694312333",
    instagram: "https://www.instagram.com/moments_by_sunny/",
    facebook: "https://www.facebook.com/profile.php?id=61579898277926",
};

pub const FEATURED_SUBTITLE: &str = "A few recent favorites—soft, candid, and full of feeling.";
pub const PORTFOLIO_SUBTITLE: &str =
    "A living archive of sessions—warm, candid, and softly lit. Browse the full collection below.";

pub struct FeaturedItem {
    pub id: u32,
    pub title: &'static str,
    pub path: &'static str,
}

pub static FEATURED: [FeaturedItem; 3] = [
    FeaturedItem {
        id: 2,
        title: "Family & Pet Portrait Session",
        path: "v1755629795/PIX08137_1_-min_v0tyhq.jpg",
    },
    FeaturedItem {
        id: 1,
        title: "Golden Hour Whispers",
        path: "v1755440878/main1-min_g3h5wa.jpg",
    },
    FeaturedItem {
        id: 3,
        title: "Golden Hour Laughter",
        path: "v1755655618/PIX06633_2_1_vazk23.jpg",
    },
];

/// Portfolio images as `(alt text, path)`, in display order
pub static PORTFOLIO: [(&str, &str); 19] = [
    (
        "Woman kneeling in grass, shaking paws with a small dog.",
        "v1755647936/PIX08085_1_qqqwtm.jpg",
    ),
    (
        "Happy couple and two small dogs.",
        "v1755645713/PIX06504_2-min_b5e1hs.jpg",
    ),
    (
        "Woman lying on green grass, looking at the camera.",
        "v1755645710/main3-min_dywo1g.jpg",
    ),
    (
        "Natural-light couples portrait in a park.",
        "v1755645713/PIX06619_2-min_sqcdpm.jpg",
    ),
    (
        "Woman on a sandy beach in a white shirt, looking back.",
        "v1755645710/PIX05405-min_yusqqm.jpg",
    ),
    (
        "Graduate in cap and gown leaning on a campus mascot statue.",
        "v1755645709/main2-min_bk9ofj.jpg",
    ),
    (
        "Woman in a sun hat looking back in a lush garden.",
        "v1755645708/DSC04534-min_cm9l0h.jpg",
    ),
    (
        "Live band performing on stage in front of an audience.",
        "v1755645711/PIX05611-min_syhqyz.jpg",
    ),
    (
        "Three friends smiling on a garden path.",
        "v1755645709/DSC04852-min_gebutk.jpg",
    ),
    (
        "Graduate tossing cap by the river with a city skyline.",
        "v1755645708/DSC00374-min-min_x60fyi.jpg",
    ),
    (
        "Woman smiling in a park, hand in hair.",
        "v1755645709/DSC04920-min_wub3gr.jpg",
    ),
    (
        "Musician singing and playing electric guitar on stage.",
        "v1755645711/PIX05751-min_wwyh3w.jpg",
    ),
    (
        "Woman in a white dress sitting on a rock by a pond, smiling back.",
        "v1755645712/PIX06255_2-min_yovu0j.jpg",
    ),
    (
        "Couple posing on a park walkway by benches.",
        "v1755645710/main5-min_urjtym.jpg",
    ),
    (
        "Woman in a pink dress smiling under a low branch in a garden.",
        "v1755645710/main4-min-min_nqxtlb.jpg",
    ),
    (
        "Small dog with a colorful bandana sitting in grass.",
        "v1755645712/PIX06494-min_hyolk7.jpg",
    ),
    (
        "Guitarist performing on stage with an electric guitar.",
        "v1755645712/PIX05639-min_idraf9.jpg",
    ),
    (
        "Person kneeling at the shoreline, drawing a heart in wet sand.",
        "v1755645710/PIX05461-min_gc0mqz.jpg",
    ),
    (
        "Woman smiling on a garden path, hand near chin.",
        "v1755645709/DSC04854-min_iqkoxt.jpg",
    ),
];

pub struct Service {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub package: &'static [&'static str],
}

pub static SERVICES: [Service; 3] = [
    Service {
        slug: "weddings",
        title: "Weddings",
        description: "Honest, documentary coverage with gentle direction when you need it.",
        package: &[
            "8–10 hours coverage",
            "Timeline help & location scouting",
            "Second photographer available",
            "Sneak peeks within 72 hours",
            "Online gallery with print rights",
        ],
    },
    Service {
        slug: "couples",
        title: "Couples & Engagements",
        description: "Candid sessions for quiet moments and big laughs—sunset walks, city corners, coffee dates.",
        package: &[
            "60–90 minutes",
            "Location & wardrobe guidance",
            "40–60 finished photographs",
            "Private gallery, print shop access",
        ],
    },
    Service {
        slug: "family",
        title: "Family & Lifestyle",
        description: "At-home or outdoor sessions focused on connection over posing.",
        package: &[
            "60 minutes",
            "Gentle direction",
            "50+ finished photographs",
            "Private online gallery",
        ],
    },
];

pub struct Approach {
    pub title: &'static str,
    pub text: &'static str,
}

pub static APPROACH: [Approach; 3] = [
    Approach {
        title: "Gentle Direction",
        text: "I guide lightly so you can relax into natural movement—never stiff, always you.",
    },
    Approach {
        title: "Natural Light",
        text: "Soft, true-to-life color and flattering light. Golden hour is my favorite collaborator.",
    },
    Approach {
        title: "Story-First",
        text: "Images that hold feeling over perfection. Your connection drives every frame.",
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQS: [Faq; 3] = [
    Faq {
        question: "Where are you based? Do you travel?",
        answer: "I’m based in Cincinnati and happily travel throughout NKY and the Midwest. For farther sessions, travel is arranged at cost.",
    },
    Faq {
        question: "How soon do we receive photos?",
        answer: "Sneak peeks within 72 hours and full galleries typically within 2–3 weeks (weddings 6–8 weeks).",
    },
    Faq {
        question: "What should we wear?",
        answer: "Soft neutrals photograph beautifully—ivory, beige, warm gray. I’ll send a simple guide and we’ll coordinate together.",
    },
];

pub static SERVICE_AREA_BADGES: [&str; 3] = [
    "Cincinnati • NKY",
    "Travel welcome",
    "Replies within 24–48h",
];
