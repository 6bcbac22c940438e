use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::database::manager::DatabaseError;

use super::types::PricingType;

struct CategorySeed {
    name: &'static str,
    slug: &'static str,
    icon: &'static str,
    description: &'static str,
}

struct ToolSeed {
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    website_url: &'static str,
    pricing_type: PricingType,
    monthly_price: Option<u32>,
    category_slug: &'static str,
    is_popular: bool,
}

const CATEGORIES: &[CategorySeed] = &[
    CategorySeed { name: "Large Language Models", slug: "llms", icon: "Brain", description: "Conversational AI assistants" },
    CategorySeed { name: "Image Generation", slug: "image-generation", icon: "Image", description: "AI image creation tools" },
    CategorySeed { name: "Video Generation", slug: "video-generation", icon: "Video", description: "AI video creation tools" },
    CategorySeed { name: "Audio & Music", slug: "audio-music", icon: "Music", description: "Voice synthesis and music AI" },
    CategorySeed { name: "Coding & Developer", slug: "coding", icon: "Code", description: "AI coding assistants" },
    CategorySeed { name: "Productivity", slug: "productivity", icon: "Zap", description: "AI productivity tools" },
    CategorySeed { name: "Writing & Content", slug: "writing", icon: "FileText", description: "AI writing assistants" },
    CategorySeed { name: "Research", slug: "research", icon: "BookOpen", description: "Research and analysis AI" },
    CategorySeed { name: "Marketing", slug: "marketing", icon: "Megaphone", description: "Marketing and SEO AI" },
];

const TOOLS: &[ToolSeed] = &[
    // LLMs
    ToolSeed { name: "ChatGPT", slug: "chatgpt", description: "OpenAI's conversational AI assistant.", website_url: "https://chatgpt.com", pricing_type: PricingType::Freemium, monthly_price: Some(20), category_slug: "llms", is_popular: true },
    ToolSeed { name: "Claude", slug: "claude", description: "Anthropic's AI assistant focused on helpfulness.", website_url: "https://claude.ai", pricing_type: PricingType::Freemium, monthly_price: Some(25), category_slug: "llms", is_popular: true },
    ToolSeed { name: "Gemini", slug: "gemini", description: "Google's multimodal AI assistant.", website_url: "https://gemini.google.com", pricing_type: PricingType::Freemium, monthly_price: None, category_slug: "llms", is_popular: false },
    ToolSeed { name: "Perplexity", slug: "perplexity", description: "AI-powered search engine with citations.", website_url: "https://perplexity.ai", pricing_type: PricingType::Freemium, monthly_price: Some(20), category_slug: "llms", is_popular: true },
    ToolSeed { name: "Mistral", slug: "mistral", description: "Open-source AI assistant from Mistral AI.", website_url: "https://mistral.ai", pricing_type: PricingType::Free, monthly_price: None, category_slug: "llms", is_popular: false },
    ToolSeed { name: "Llama", slug: "llama", description: "Meta's open-source large language model.", website_url: "https://llama.ai", pricing_type: PricingType::Free, monthly_price: None, category_slug: "llms", is_popular: false },
    // Image generation
    ToolSeed { name: "Midjourney", slug: "midjourney", description: "AI image generation from text descriptions.", website_url: "https://midjourney.com", pricing_type: PricingType::Subscription, monthly_price: Some(10), category_slug: "image-generation", is_popular: true },
    ToolSeed { name: "DALL-E", slug: "dall-e", description: "OpenAI's image generation model.", website_url: "https://openai.com/dall-e-3", pricing_type: PricingType::PerToken, monthly_price: None, category_slug: "image-generation", is_popular: false },
    ToolSeed { name: "Stable Diffusion", slug: "stable-diffusion", description: "Open-source image generation model.", website_url: "https://stability.ai", pricing_type: PricingType::Free, monthly_price: None, category_slug: "image-generation", is_popular: true },
    ToolSeed { name: "Leonardo", slug: "leonardo", description: "AI-powered image creation platform.", website_url: "https://leonardo.ai", pricing_type: PricingType::Freemium, monthly_price: Some(12), category_slug: "image-generation", is_popular: false },
    ToolSeed { name: "Adobe Firefly", slug: "adobe-firefly", description: "Adobe's generative AI for images.", website_url: "https://firefly.adobe.com", pricing_type: PricingType::Freemium, monthly_price: None, category_slug: "image-generation", is_popular: false },
    // Coding
    ToolSeed { name: "GitHub Copilot", slug: "github-copilot", description: "AI pair programmer by GitHub and OpenAI.", website_url: "https://github.com/features/copilot", pricing_type: PricingType::Subscription, monthly_price: Some(10), category_slug: "coding", is_popular: true },
    ToolSeed { name: "Cursor", slug: "cursor", description: "AI-first code editor built on VS Code.", website_url: "https://cursor.sh", pricing_type: PricingType::Freemium, monthly_price: Some(20), category_slug: "coding", is_popular: true },
    ToolSeed { name: "Windsurf", slug: "windsurf", description: "AI-powered IDE from Codeium.", website_url: "https://windsurf.com", pricing_type: PricingType::Freemium, monthly_price: None, category_slug: "coding", is_popular: false },
    ToolSeed { name: "Tabnine", slug: "tabnine", description: "AI code completion tool.", website_url: "https://tabnine.com", pricing_type: PricingType::Freemium, monthly_price: Some(12), category_slug: "coding", is_popular: false },
    ToolSeed { name: "Amazon CodeWhisperer", slug: "amazon-codewhisperer", description: "AWS's AI coding companion.", website_url: "https://aws.amazon.com/codewhisperer", pricing_type: PricingType::Free, monthly_price: None, category_slug: "coding", is_popular: false },
    ToolSeed { name: "Replit AI", slug: "replit-ai", description: "AI assistant for Replit platform.", website_url: "https://replit.com", pricing_type: PricingType::Freemium, monthly_price: Some(7), category_slug: "coding", is_popular: false },
    // Video generation
    ToolSeed { name: "Runway", slug: "runway", description: "AI video generation and editing platform.", website_url: "https://runway.ml", pricing_type: PricingType::Freemium, monthly_price: Some(15), category_slug: "video-generation", is_popular: true },
    ToolSeed { name: "Pika", slug: "pika", description: "AI video generation from text and images.", website_url: "https://pika.art", pricing_type: PricingType::Freemium, monthly_price: None, category_slug: "video-generation", is_popular: false },
    ToolSeed { name: "Sora", slug: "sora", description: "OpenAI's text-to-video model.", website_url: "https://openai.com/sora", pricing_type: PricingType::Subscription, monthly_price: None, category_slug: "video-generation", is_popular: false },
    ToolSeed { name: "Luma Dream Machine", slug: "luma-dream-machine", description: "AI video generation from images.", website_url: "https://lumalabs.ai", pricing_type: PricingType::Freemium, monthly_price: None, category_slug: "video-generation", is_popular: false },
    // Audio & music
    ToolSeed { name: "ElevenLabs", slug: "elevenlabs", description: "AI voice synthesis and cloning.", website_url: "https://elevenlabs.io", pricing_type: PricingType::Freemium, monthly_price: Some(5), category_slug: "audio-music", is_popular: true },
    ToolSeed { name: "Murf AI", slug: "murf-ai", description: "AI voice generator for professionals.", website_url: "https://murf.ai", pricing_type: PricingType::Freemium, monthly_price: Some(29), category_slug: "audio-music", is_popular: false },
    ToolSeed { name: "Descript", slug: "descript", description: "Audio/video editor with AI transcription.", website_url: "https://descript.com", pricing_type: PricingType::Freemium, monthly_price: Some(12), category_slug: "audio-music", is_popular: false },
    ToolSeed { name: "Suno", slug: "suno", description: "AI music generation from text prompts.", website_url: "https://suno.ai", pricing_type: PricingType::Freemium, monthly_price: Some(10), category_slug: "audio-music", is_popular: true },
    ToolSeed { name: "Udio", slug: "udio", description: "AI music creation platform.", website_url: "https://udio.com", pricing_type: PricingType::Freemium, monthly_price: None, category_slug: "audio-music", is_popular: false },
    // Productivity
    ToolSeed { name: "Notion AI", slug: "notion-ai", description: "AI assistant integrated into Notion.", website_url: "https://notion.so", pricing_type: PricingType::Subscription, monthly_price: Some(10), category_slug: "productivity", is_popular: true },
    ToolSeed { name: "Raycast AI", slug: "raycast-ai", description: "AI assistant for macOS.", website_url: "https://raycast.com", pricing_type: PricingType::Freemium, monthly_price: Some(10), category_slug: "productivity", is_popular: false },
    ToolSeed { name: "Arc Browser", slug: "arc-browser", description: "Browser with AI features from The Browser Company.", website_url: "https://arc.net", pricing_type: PricingType::Free, monthly_price: None, category_slug: "productivity", is_popular: false },
    ToolSeed { name: "Gamma", slug: "gamma", description: "AI-powered presentation maker.", website_url: "https://gamma.app", pricing_type: PricingType::Freemium, monthly_price: Some(10), category_slug: "productivity", is_popular: true },
    ToolSeed { name: "Napkin", slug: "napkin", description: "AI visual content generator.", website_url: "https://napkin.ai", pricing_type: PricingType::Freemium, monthly_price: None, category_slug: "productivity", is_popular: false },
    ToolSeed { name: "Otter.ai", slug: "otter-ai", description: "AI meeting notes and transcription.", website_url: "https://otter.ai", pricing_type: PricingType::Freemium, monthly_price: Some(10), category_slug: "productivity", is_popular: false },
    // Writing
    ToolSeed { name: "Jasper", slug: "jasper", description: "AI writing assistant for marketing.", website_url: "https://jasper.ai", pricing_type: PricingType::Subscription, monthly_price: Some(49), category_slug: "writing", is_popular: false },
    ToolSeed { name: "Copy.ai", slug: "copy-ai", description: "AI copywriting tool.", website_url: "https://copy.ai", pricing_type: PricingType::Freemium, monthly_price: Some(36), category_slug: "writing", is_popular: false },
    ToolSeed { name: "Writesonic", slug: "writesonic", description: "AI content writing platform.", website_url: "https://writesonic.com", pricing_type: PricingType::Freemium, monthly_price: Some(12), category_slug: "writing", is_popular: false },
    ToolSeed { name: "Grammarly", slug: "grammarly", description: "AI writing enhancement and grammar checker.", website_url: "https://grammarly.com", pricing_type: PricingType::Freemium, monthly_price: Some(12), category_slug: "writing", is_popular: true },
    // Research
    ToolSeed { name: "Elicit", slug: "elicit", description: "AI research assistant for literature review.", website_url: "https://elicit.org", pricing_type: PricingType::Freemium, monthly_price: None, category_slug: "research", is_popular: true },
    ToolSeed { name: "Consensus", slug: "consensus", description: "AI search engine for scientific papers.", website_url: "https://consensus.app", pricing_type: PricingType::Freemium, monthly_price: None, category_slug: "research", is_popular: false },
    ToolSeed { name: "Perplexity Pro", slug: "perplexity-pro", description: "Advanced research search with pro features.", website_url: "https://perplexity.ai", pricing_type: PricingType::Subscription, monthly_price: Some(20), category_slug: "research", is_popular: false },
    ToolSeed { name: "SciSpace", slug: "scispace", description: "AI research platform for papers.", website_url: "https://scispace.com", pricing_type: PricingType::Freemium, monthly_price: None, category_slug: "research", is_popular: false },
    ToolSeed { name: "ResearchRabbit", slug: "research-rabbit", description: "AI-powered research assistant.", website_url: "https://researchrabbit.com", pricing_type: PricingType::Free, monthly_price: None, category_slug: "research", is_popular: false },
    // Marketing
    ToolSeed { name: "HubSpot AI", slug: "hubspot-ai", description: "AI tools integrated into HubSpot CRM.", website_url: "https://hubspot.com", pricing_type: PricingType::Subscription, monthly_price: Some(15), category_slug: "marketing", is_popular: false },
    ToolSeed { name: "Jasper Marketing", slug: "jasper-marketing", description: "AI marketing content generation.", website_url: "https://jasper.ai", pricing_type: PricingType::Subscription, monthly_price: Some(199), category_slug: "marketing", is_popular: false },
    ToolSeed { name: "Surfer SEO", slug: "surfer-seo", description: "AI-powered SEO content optimization.", website_url: "https://surferseo.com", pricing_type: PricingType::Subscription, monthly_price: Some(49), category_slug: "marketing", is_popular: false },
    ToolSeed { name: "Copy.ai Marketing", slug: "copy-ai-marketing", description: "AI marketing copy generator.", website_url: "https://copy.ai", pricing_type: PricingType::Freemium, monthly_price: Some(36), category_slug: "marketing", is_popular: false },
    ToolSeed { name: "MarketMuse", slug: "marketmuse", description: "AI content planning and optimization.", website_url: "https://marketmuse.com", pricing_type: PricingType::Subscription, monthly_price: Some(150), category_slug: "marketing", is_popular: false },
    ToolSeed { name: "Phrasee", slug: "phrasee", description: "AI for marketing copy optimization.", website_url: "https://phrasee.co", pricing_type: PricingType::Subscription, monthly_price: None, category_slug: "marketing", is_popular: false },
    // Later additions
    ToolSeed { name: "Grok", slug: "grok", description: "xAI's conversational AI assistant.", website_url: "https://x.ai", pricing_type: PricingType::Freemium, monthly_price: None, category_slug: "llms", is_popular: false },
    ToolSeed { name: "Character AI", slug: "character-ai", description: "AI characters for conversations.", website_url: "https://character.ai", pricing_type: PricingType::Freemium, monthly_price: None, category_slug: "llms", is_popular: false },
    ToolSeed { name: "Hugging Face", slug: "hugging-face", description: "Open-source AI model hub.", website_url: "https://huggingface.co", pricing_type: PricingType::Freemium, monthly_price: None, category_slug: "llms", is_popular: false },
    ToolSeed { name: "Ideogram", slug: "ideogram", description: "AI image generation with text rendering.", website_url: "https://ideogram.ai", pricing_type: PricingType::Freemium, monthly_price: None, category_slug: "image-generation", is_popular: false },
    ToolSeed { name: "Kling AI", slug: "kling-ai", description: "Chinese AI video generation tool.", website_url: "https://klingai.com", pricing_type: PricingType::Freemium, monthly_price: None, category_slug: "video-generation", is_popular: false },
    ToolSeed { name: "HeyGen", slug: "heygen", description: "AI video generation with avatars.", website_url: "https://heygen.com", pricing_type: PricingType::Freemium, monthly_price: Some(30), category_slug: "video-generation", is_popular: false },
];

/// Create catalog tables if they do not exist yet
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS categories (
            id UUID PRIMARY KEY,
            slug TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            icon TEXT NOT NULL,
            description TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS tools (
            id UUID PRIMARY KEY,
            slug TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            website_url TEXT NOT NULL,
            pricing_type TEXT NOT NULL,
            monthly_price NUMERIC,
            yearly_price NUMERIC,
            pricing_note TEXT,
            features TEXT[],
            is_popular BOOLEAN NOT NULL DEFAULT FALSE,
            last_verified_at TIMESTAMPTZ,
            category_id UUID NOT NULL REFERENCES categories(id),
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Counts of newly inserted rows from a seeding run
pub struct SeedReport {
    pub categories: u32,
    pub tools: u32,
}

/// Upsert the built-in catalog corpus. Idempotent, keyed by slug: existing
/// rows are left untouched so re-running never clobbers live data.
pub async fn run(pool: &PgPool) -> Result<SeedReport, DatabaseError> {
    ensure_schema(pool).await?;

    let mut categories_created = 0u32;
    for cat in CATEGORIES {
        let result = sqlx::query(
            "INSERT INTO categories (id, slug, name, icon, description)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (slug) DO NOTHING",
        )
        .bind(Uuid::new_v4())
        .bind(cat.slug)
        .bind(cat.name)
        .bind(cat.icon)
        .bind(cat.description)
        .execute(pool)
        .await?;
        categories_created += result.rows_affected() as u32;
    }
    info!("Seeded {} new categories", categories_created);

    let mut tools_created = 0u32;
    for tool in TOOLS {
        let category_id: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM categories WHERE slug = $1")
                .bind(tool.category_slug)
                .fetch_optional(pool)
                .await?;

        let Some(category_id) = category_id else {
            tracing::warn!(slug = tool.slug, category = tool.category_slug, "skipping tool with unknown category");
            continue;
        };

        let monthly = tool.monthly_price.map(Decimal::from);
        let yearly = yearly_price(monthly);

        let result = sqlx::query(
            "INSERT INTO tools (id, slug, name, description, website_url, pricing_type,
                                monthly_price, yearly_price, is_popular, last_verified_at, category_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, now(), $10)
             ON CONFLICT (slug) DO NOTHING",
        )
        .bind(Uuid::new_v4())
        .bind(tool.slug)
        .bind(tool.name)
        .bind(tool.description)
        .bind(tool.website_url)
        .bind(tool.pricing_type.as_str())
        .bind(monthly)
        .bind(yearly)
        .bind(tool.is_popular)
        .bind(category_id)
        .execute(pool)
        .await?;
        tools_created += result.rows_affected() as u32;
    }
    info!("Seeded {} new tools", tools_created);

    Ok(SeedReport {
        categories: categories_created,
        tools: tools_created,
    })
}

/// Yearly price is derived: twelve months for the price of ten
fn yearly_price(monthly: Option<Decimal>) -> Option<Decimal> {
    monthly.map(|m| m * Decimal::from(10))
}
