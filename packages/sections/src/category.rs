use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Category a section definition belongs to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SectionCategory {
    Hero,
    Features,
    Cta,
    Pricing,
    Testimonials,
    Faq,
    Team,
    Gallery,
    Stats,
    Contact,
    Footer,
    Header,
    Blog,
    Logos,
    Newsletter,
    Ecommerce,
    Video,
    About,
    Banner,
    Divider,
    Live,
}

impl SectionCategory {
    pub fn label(self) -> &'static str {
        match self {
            SectionCategory::Hero => "Hero",
            SectionCategory::Features => "Features",
            SectionCategory::Cta => "Call to Action",
            SectionCategory::Pricing => "Pricing",
            SectionCategory::Testimonials => "Testimonials",
            SectionCategory::Faq => "FAQ",
            SectionCategory::Team => "Team",
            SectionCategory::Gallery => "Gallery",
            SectionCategory::Stats => "Stats",
            SectionCategory::Contact => "Contact",
            SectionCategory::Footer => "Footer",
            SectionCategory::Header => "Header",
            SectionCategory::Blog => "Blog",
            SectionCategory::Logos => "Logos",
            SectionCategory::Newsletter => "Newsletter",
            SectionCategory::Ecommerce => "E-commerce",
            SectionCategory::Video => "Video",
            SectionCategory::About => "About",
            SectionCategory::Banner => "Banner",
            SectionCategory::Divider => "Divider",
            SectionCategory::Live => "Live Data",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SectionCategory::Hero => "Hero sections with headlines and CTAs",
            SectionCategory::Features => "Showcase features and services",
            SectionCategory::Cta => "Drive user action",
            SectionCategory::Pricing => "Pricing tables and plans",
            SectionCategory::Testimonials => "Customer reviews and quotes",
            SectionCategory::Faq => "Frequently asked questions",
            SectionCategory::Team => "Team member profiles",
            SectionCategory::Gallery => "Image galleries and portfolios",
            SectionCategory::Stats => "Numbers and statistics",
            SectionCategory::Contact => "Contact forms and info",
            SectionCategory::Footer => "Page footers",
            SectionCategory::Header => "Navigation headers",
            SectionCategory::Blog => "Blog post layouts",
            SectionCategory::Logos => "Client and partner logos",
            SectionCategory::Newsletter => "Email signup forms",
            SectionCategory::Ecommerce => "Product displays",
            SectionCategory::Video => "Video showcases",
            SectionCategory::About => "About and story sections",
            SectionCategory::Banner => "Announcement banners",
            SectionCategory::Divider => "Visual section dividers",
            SectionCategory::Live => "Dynamic sections that display real data from your dashboard",
        }
    }
}

/// Display metadata for a section category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub id: SectionCategory,
    pub label: &'static str,
    pub description: &'static str,
}

/// All section categories with their labels, in picker order
pub fn section_categories() -> Vec<CategoryInfo> {
    SectionCategory::iter()
        .map(|id| CategoryInfo {
            id,
            label: id.label(),
            description: id.description(),
        })
        .collect()
}

/// Audience a page template is aimed at
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TemplateCategory {
    Creator,
    ContentCreator,
    Coach,
    CourseCreator,
    Author,
    Musician,
    Saas,
    Agency,
    Business,
    Portfolio,
    Landing,
    Ecommerce,
    Blog,
    Personal,
    Restaurant,
    #[serde(rename = "realestate")]
    #[strum(serialize = "realestate")]
    RealEstate,
    Health,
    Education,
    Event,
}

impl TemplateCategory {
    pub fn label(self) -> &'static str {
        match self {
            TemplateCategory::Creator => "Creator",
            TemplateCategory::ContentCreator => "Content Creator",
            TemplateCategory::Coach => "Coach & Consultant",
            TemplateCategory::CourseCreator => "Course Creator",
            TemplateCategory::Author => "Author & Writer",
            TemplateCategory::Musician => "Musician & Artist",
            TemplateCategory::Saas => "SaaS / Tech",
            TemplateCategory::Agency => "Agency",
            TemplateCategory::Business => "Business",
            TemplateCategory::Portfolio => "Portfolio",
            TemplateCategory::Landing => "Landing Page",
            TemplateCategory::Ecommerce => "E-commerce",
            TemplateCategory::Blog => "Blog",
            TemplateCategory::Personal => "Personal",
            TemplateCategory::Restaurant => "Restaurant",
            TemplateCategory::RealEstate => "Real Estate",
            TemplateCategory::Health => "Health",
            TemplateCategory::Education => "Education",
            TemplateCategory::Event => "Event",
        }
    }
}
