//! The compiled-in directory content: categories, tools, and the button
//! lists the header and filter bar render from.
//!
//! Canonical taxonomy is the 16-category list. Every tool belongs to exactly
//! one category; tools marked coming-soon carry no url.

use super::{Badge, Category, Tool};

/// A labelled filter/navigation button pointing at a category id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryLink {
    pub id: &'static str,
    pub name: &'static str,
}

/// Filter bar buttons: "All" plus one per category.
pub const FILTER_BUTTONS: &[CategoryLink] = &[
    CategoryLink { id: "all", name: "All" },
    CategoryLink { id: "faceless-video", name: "Faceless Video" },
    CategoryLink { id: "video-generators", name: "Video Generators" },
    CategoryLink { id: "writing-tools", name: "Writing Tools" },
    CategoryLink { id: "presentation-tools", name: "Presentation Tools" },
    CategoryLink { id: "short-clippers", name: "Short Clippers" },
    CategoryLink { id: "marketing-tools", name: "Marketing Tools" },
    CategoryLink { id: "voice-tools", name: "Voice Tools" },
    CategoryLink { id: "website-builders", name: "Website Builders" },
    CategoryLink { id: "image-generators", name: "Image Generators" },
    CategoryLink { id: "chatbots", name: "Chatbots" },
    CategoryLink { id: "music-generators", name: "AI Music Generators" },
    CategoryLink { id: "data-analysis", name: "AI Data Analysis Tools" },
    CategoryLink { id: "gaming-tools", name: "AI Gaming Tools" },
    CategoryLink { id: "ai-diagrams", name: "UML, ER, Use Case Diagrams" },
    CategoryLink { id: "other-tools", name: "Other Tools" },
    CategoryLink { id: "utility-tools", name: "Utility Tools" },
];

/// Dropdown menu entries (full taxonomy, emoji labels).
pub const MENU_LINKS: &[CategoryLink] = &[
    CategoryLink { id: "faceless-video", name: "🎬 Faceless AI Video" },
    CategoryLink { id: "video-generators", name: "📹 AI Video Generators" },
    CategoryLink { id: "writing-tools", name: "✍️ AI Writing Tools" },
    CategoryLink { id: "presentation-tools", name: "📊 AI Presentation Tools" },
    CategoryLink { id: "short-clippers", name: "✂️ AI Short Clippers" },
    CategoryLink { id: "marketing-tools", name: "📈 AI Marketing Tools" },
    CategoryLink { id: "voice-tools", name: "🎤 AI Voice/Audio Tools" },
    CategoryLink { id: "website-builders", name: "🌐 AI Website Builders" },
    CategoryLink { id: "image-generators", name: "🖼️ AI Image Generators" },
    CategoryLink { id: "chatbots", name: "🤖 ChatGPT Alternatives" },
    CategoryLink { id: "music-generators", name: "🎵 AI Music Generators" },
    CategoryLink { id: "data-analysis", name: "🧠 AI Data Analysis Tools" },
    CategoryLink { id: "ai-diagrams", name: "📐 UML, ER, Use Case Diagrams" },
    CategoryLink { id: "gaming-tools", name: "🎮 AI Gaming Tools" },
    CategoryLink { id: "other-tools", name: "🧪 Other AI Tools" },
    CategoryLink { id: "utility-tools", name: "🛠️ Utility Tools" },
];

/// Desktop quick links shown directly in the header nav.
pub const NAV_LINKS: &[CategoryLink] = &[
    CategoryLink { id: "chatbots", name: "🤖 CHATBOTS" },
    CategoryLink { id: "image-generators", name: "🖼️ IMAGE GENERATORS" },
    CategoryLink { id: "music-generators", name: "🎵 MUSIC TOOLS" },
    CategoryLink { id: "data-analysis", name: "📊 DATA TOOLS" },
    CategoryLink { id: "ai-diagrams", name: "📐 AI DIAGRAMS" },
    CategoryLink { id: "writing-tools", name: "✍️ TEXT TOOLS" },
    CategoryLink { id: "video-generators", name: "📹 VIDEO TOOLS" },
];

macro_rules! tool {
    ($name:expr, $desc:expr, $icon:expr, $url:expr) => {
        Tool {
            name: $name,
            description: $desc,
            icon: $icon,
            url: Some($url),
            badge: Badge::None,
            coming_soon: false,
        }
    };
    ($name:expr, $desc:expr, $icon:expr, $url:expr, $badge:expr) => {
        Tool {
            name: $name,
            description: $desc,
            icon: $icon,
            url: Some($url),
            badge: $badge,
            coming_soon: false,
        }
    };
}

macro_rules! coming_soon {
    ($name:expr, $desc:expr, $icon:expr) => {
        Tool {
            name: $name,
            description: $desc,
            icon: $icon,
            url: None,
            badge: Badge::None,
            coming_soon: true,
        }
    };
}

/// The full directory, in display order.
pub const CATALOG: &[Category] = &[
    Category {
        id: "faceless-video",
        name: "Faceless AI Video",
        tools: &[
            tool!(
                "AutoShorts",
                "Automated faceless video channels on autopilot",
                "fas fa-user-secret",
                "https://autoshorts.ai"
            ),
            tool!(
                "Fliki",
                "Turn scripts into narrated faceless videos",
                "fas fa-film",
                "https://fliki.ai",
                Badge::Recommended
            ),
            tool!(
                "Revid",
                "Short-form faceless video maker for social channels",
                "fas fa-clapperboard",
                "https://revid.ai",
                Badge::New
            ),
            coming_soon!(
                "Crayo",
                "Clip-style faceless video generator",
                "fas fa-wand-magic-sparkles"
            ),
        ],
    },
    Category {
        id: "video-generators",
        name: "AI Video Generators",
        tools: &[
            tool!(
                "Runway",
                "Generate and edit cinematic clips from text prompts",
                "fas fa-video",
                "https://runwayml.com",
                Badge::Recommended
            ),
            tool!(
                "Synthesia",
                "Studio-quality avatar presenter videos from scripts",
                "fas fa-person-chalkboard",
                "https://www.synthesia.io"
            ),
            tool!(
                "Pika",
                "Idea-to-video generation with camera controls",
                "fas fa-camera",
                "https://pika.art"
            ),
            tool!(
                "Luma Dream Machine",
                "High-fidelity text-to-video and image-to-video",
                "fas fa-cloud-moon",
                "https://lumalabs.ai/dream-machine",
                Badge::New
            ),
            coming_soon!(
                "Sora",
                "Long-horizon text-to-video generation",
                "fas fa-star"
            ),
        ],
    },
    Category {
        id: "writing-tools",
        name: "AI Writing Tools",
        tools: &[
            tool!(
                "Jasper",
                "Marketing copy and long-form content assistant",
                "fas fa-pen",
                "https://www.jasper.ai",
                Badge::Recommended
            ),
            tool!(
                "Copy.ai",
                "Sales and blog copy generator with workflows",
                "fas fa-pen-nib",
                "https://www.copy.ai"
            ),
            tool!(
                "QuillBot",
                "Paraphrasing, grammar, and summarizer suite",
                "fas fa-feather",
                "https://quillbot.com"
            ),
            tool!(
                "Sudowrite",
                "Fiction-focused writing partner for authors",
                "fas fa-book",
                "https://www.sudowrite.com"
            ),
        ],
    },
    Category {
        id: "presentation-tools",
        name: "AI Presentation Tools",
        tools: &[
            tool!(
                "Gamma",
                "Generate polished decks and docs from an outline",
                "fas fa-chalkboard",
                "https://gamma.app",
                Badge::Recommended
            ),
            tool!(
                "Tome",
                "Narrative-first presentation builder",
                "fas fa-layer-group",
                "https://tome.app"
            ),
            tool!(
                "Beautiful.ai",
                "Slides that design themselves as you type",
                "fas fa-palette",
                "https://www.beautiful.ai"
            ),
            tool!(
                "SlidesAI",
                "Turn any text into Google Slides automatically",
                "fas fa-display",
                "https://www.slidesai.io",
                Badge::New
            ),
        ],
    },
    Category {
        id: "short-clippers",
        name: "AI Short Clippers",
        tools: &[
            tool!(
                "Opus Clip",
                "Repurpose long videos into viral shorts",
                "fas fa-cut",
                "https://www.opus.pro",
                Badge::Recommended
            ),
            tool!(
                "Vizard",
                "Clip podcasts and webinars into social posts",
                "fas fa-scissors",
                "https://vizard.ai"
            ),
            tool!(
                "Munch",
                "Extract engaging clips with trend analysis",
                "fas fa-burger",
                "https://www.getmunch.com",
                Badge::New
            ),
        ],
    },
    Category {
        id: "marketing-tools",
        name: "AI Marketing Tools",
        tools: &[
            tool!(
                "AdCreative.ai",
                "Conversion-focused ad creatives in seconds",
                "fas fa-bullhorn",
                "https://www.adcreative.ai",
                Badge::Recommended
            ),
            tool!(
                "Surfer",
                "SEO content optimization and keyword research",
                "fas fa-magnifying-glass-chart",
                "https://surferseo.com"
            ),
            tool!(
                "Ocoya",
                "Social media scheduling with generated captions",
                "fas fa-calendar",
                "https://www.ocoya.com",
                Badge::New
            ),
        ],
    },
    Category {
        id: "voice-tools",
        name: "AI Voice/Audio Tools",
        tools: &[
            tool!(
                "ElevenLabs",
                "Lifelike text-to-speech and voice cloning",
                "fas fa-microphone",
                "https://elevenlabs.io",
                Badge::Recommended
            ),
            tool!(
                "Murf",
                "Studio voiceovers from plain text",
                "fas fa-microphone-lines",
                "https://murf.ai"
            ),
            tool!(
                "PlayHT",
                "Realistic speech synthesis API and editor",
                "fas fa-volume-high",
                "https://play.ht"
            ),
            tool!(
                "Adobe Podcast",
                "One-click speech enhancement for recordings",
                "fas fa-headphones",
                "https://podcast.adobe.com"
            ),
        ],
    },
    Category {
        id: "website-builders",
        name: "AI Website Builders",
        tools: &[
            tool!(
                "Framer",
                "Publish a responsive site from a text prompt",
                "fas fa-globe",
                "https://www.framer.com",
                Badge::Recommended
            ),
            tool!(
                "Durable",
                "Business site with copy and images in 30 seconds",
                "fas fa-briefcase",
                "https://durable.co"
            ),
            tool!(
                "10Web",
                "WordPress sites generated and hosted end to end",
                "fab fa-wordpress",
                "https://10web.io"
            ),
        ],
    },
    Category {
        id: "image-generators",
        name: "AI Image Generators",
        tools: &[
            tool!(
                "Midjourney",
                "High-end artistic image generation",
                "fas fa-image",
                "https://www.midjourney.com",
                Badge::Recommended
            ),
            tool!(
                "DALL-E 3",
                "Prompt-faithful image generation",
                "fas fa-images",
                "https://openai.com/dall-e-3"
            ),
            tool!(
                "Stable Diffusion",
                "Open-weight image models you can run anywhere",
                "fas fa-wand-magic",
                "https://stability.ai"
            ),
            tool!(
                "Leonardo",
                "Production asset pipeline for creative teams",
                "fas fa-paintbrush",
                "https://leonardo.ai",
                Badge::New
            ),
            tool!(
                "Ideogram",
                "Image generation with reliable text rendering",
                "fas fa-font",
                "https://ideogram.ai"
            ),
        ],
    },
    Category {
        id: "chatbots",
        name: "ChatGPT Alternatives",
        tools: &[
            tool!(
                "ChatGPT",
                "conversational AI",
                "fas fa-robot",
                "https://chat.openai.com"
            ),
            tool!(
                "Claude",
                "Assistant for writing, analysis, and coding",
                "fas fa-comment-dots",
                "https://claude.ai",
                Badge::Recommended
            ),
            tool!(
                "Gemini",
                "Google's multimodal assistant",
                "fas fa-gem",
                "https://gemini.google.com"
            ),
            tool!(
                "Perplexity",
                "Answer engine with cited web search",
                "fas fa-circle-question",
                "https://www.perplexity.ai",
                Badge::New
            ),
            tool!(
                "Poe",
                "Many assistants behind one subscription",
                "fas fa-comments",
                "https://poe.com"
            ),
        ],
    },
    Category {
        id: "music-generators",
        name: "AI Music Generators",
        tools: &[
            tool!(
                "Suno",
                "Full songs with vocals from a text prompt",
                "fas fa-music",
                "https://suno.com",
                Badge::Recommended
            ),
            tool!(
                "Udio",
                "Studio-grade track generation and remixing",
                "fas fa-sliders",
                "https://www.udio.com",
                Badge::New
            ),
            tool!(
                "AIVA",
                "Orchestral and cinematic composition assistant",
                "fas fa-guitar",
                "https://www.aiva.ai"
            ),
            tool!(
                "Soundraw",
                "Royalty-free background music generator",
                "fas fa-wave-square",
                "https://soundraw.io"
            ),
        ],
    },
    Category {
        id: "data-analysis",
        name: "AI Data Analysis Tools",
        tools: &[
            tool!(
                "Julius",
                "Analyze spreadsheets and plot results by asking",
                "fas fa-chart-bar",
                "https://julius.ai",
                Badge::Recommended
            ),
            tool!(
                "Akkio",
                "No-code predictive modeling on tabular data",
                "fas fa-chart-line",
                "https://www.akkio.com"
            ),
            tool!(
                "Rows",
                "Spreadsheet with built-in analysis copilots",
                "fas fa-table",
                "https://rows.com"
            ),
            coming_soon!(
                "Briefer",
                "Notebook-style data workspace with AI queries",
                "fas fa-database"
            ),
        ],
    },
    Category {
        id: "ai-diagrams",
        name: "UML, ER, Use Case Diagrams",
        tools: &[
            tool!(
                "Eraser",
                "Diagram-as-code with an AI copilot",
                "fas fa-project-diagram",
                "https://www.eraser.io",
                Badge::Recommended
            ),
            tool!(
                "Whimsical",
                "Flowcharts and mind maps from prompts",
                "fas fa-diagram-project",
                "https://whimsical.com",
                Badge::New
            ),
            tool!(
                "Miro Assist",
                "Generate and cluster diagrams on an infinite board",
                "fas fa-object-group",
                "https://miro.com"
            ),
        ],
    },
    Category {
        id: "gaming-tools",
        name: "AI Gaming Tools",
        tools: &[
            tool!(
                "Scenario",
                "Game asset generation tuned to your art style",
                "fas fa-gamepad",
                "https://www.scenario.com",
                Badge::Recommended
            ),
            tool!(
                "Inworld",
                "Believable NPC dialogue and behavior engines",
                "fas fa-ghost",
                "https://inworld.ai"
            ),
            tool!(
                "Rosebud",
                "Describe a game and get a playable prototype",
                "fas fa-dice",
                "https://rosebud.ai",
                Badge::New
            ),
        ],
    },
    Category {
        id: "other-tools",
        name: "Other AI Tools",
        tools: &[
            tool!(
                "Notion AI",
                "Workspace assistant for notes, docs, and wikis",
                "fas fa-note-sticky",
                "https://www.notion.so/product/ai",
                Badge::Recommended
            ),
            tool!(
                "Otter",
                "Meeting transcription with live summaries",
                "fas fa-file-audio",
                "https://otter.ai"
            ),
            tool!(
                "Consensus",
                "Search answers grounded in academic papers",
                "fas fa-flask",
                "https://consensus.app",
                Badge::Other("Beta")
            ),
            tool!(
                "Zapier Agents",
                "Automations that plan their own steps",
                "fas fa-bolt",
                "https://zapier.com/agents"
            ),
        ],
    },
    Category {
        id: "utility-tools",
        name: "Utility Tools",
        tools: &[
            tool!(
                "remove.bg",
                "One-click background removal for images",
                "fas fa-eraser",
                "https://www.remove.bg"
            ),
            tool!(
                "Upscayl",
                "Free, open source image upscaling",
                "fas fa-up-right-and-down-left-from-center",
                "https://upscayl.org",
                Badge::Recommended
            ),
            tool!(
                "TinyWow",
                "Grab bag of free file and media utilities",
                "fas fa-toolbox",
                "https://tinywow.com"
            ),
            coming_soon!(
                "PDF Copilot",
                "Ask questions across folders of documents",
                "fas fa-file-pdf"
            ),
        ],
    },
];
