//! Static page content.
//!
//! The page is data: a title, five sections of blocks, and a footer. The
//! layout engine turns it into positioned boxes; nothing here knows about
//! pixels beyond the spacing values carried by container blocks.

use crate::section::SectionId;

/// Small pictograms drawn beside list entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Heart,
    Book,
    Globe,
    Users,
}

/// Text roles, mapped to a size and a color by the layout and theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Body copy.
    Body,
    /// Larger introductory copy.
    Lead,
    /// Secondary body copy.
    Muted,
    /// Card heading.
    CardTitle,
    /// Bold entry heading inside a list.
    EntryTitle,
    /// Footer column heading.
    FooterTitle,
    /// Footer copy.
    FooterText,
}

/// Background fill of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFill {
    /// Plain page-colored card with a border.
    Plain,
    /// Tinted card.
    Surface,
    /// Lightly tinted card.
    SurfaceAlt,
}

/// An opportunity listing: icon badge, title and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
}

/// A unit of page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Word-wrapped text.
    Text {
        text: &'static str,
        style: TextStyle,
    },
    /// Disc-bulleted list.
    Bullets(Vec<&'static str>),
    /// Icon-prefixed one-line list.
    IconList(Vec<(Icon, &'static str)>),
    /// Listings with an icon badge.
    Entries(Vec<Entry>),
    /// Decorative links with no destination.
    Links(Vec<&'static str>),
    /// Filled box around its children.
    Card {
        fill: CardFill,
        padding: u32,
        children: Vec<Block>,
    },
    /// Columns above the mobile breakpoint, a single column below it.
    Grid {
        columns: u32,
        gap: u32,
        children: Vec<Block>,
    },
    /// Children stacked vertically with a gap between them.
    Stack {
        gap: u32,
        children: Vec<Block>,
    },
}

/// One navigable section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub heading: &'static str,
    pub body: Block,
}

/// The whole page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: &'static str,
    pub sections: Vec<Section>,
    pub footer: Block,
    pub closing: Vec<&'static str>,
}

impl Page {
    /// Find a section by identifier.
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

fn text(text: &'static str, style: TextStyle) -> Block {
    Block::Text { text, style }
}

fn card(fill: CardFill, padding: u32, children: Vec<Block>) -> Block {
    Block::Card {
        fill,
        padding,
        children,
    }
}

fn titled_card(fill: CardFill, title: &'static str, body: &'static str) -> Block {
    card(
        fill,
        24,
        vec![
            text(title, TextStyle::CardTitle),
            text(body, TextStyle::Muted),
        ],
    )
}

/// The Green Hope NGO page.
pub fn green_hope() -> Page {
    Page {
        title: "Green Hope NGO",
        sections: vec![about(), mission(), vision(), work(), opportunities()],
        footer: footer(),
        closing: vec![
            "(c) 2024 Green Hope NGO. All rights reserved.",
            "Serving communities for over a century.",
        ],
    }
}

fn about() -> Section {
    Section {
        id: SectionId::About,
        heading: "About Green Hope NGO",
        body: Block::Grid {
            columns: 2,
            gap: 32,
            children: vec![
                Block::Stack {
                    gap: 16,
                    children: vec![
                        text(
                            "Founded over a century ago, Green Hope NGO has been a beacon of \
                             hope and change in our community. Our journey began with a simple \
                             yet powerful vision: to create a world where every individual has \
                             the opportunity to thrive, regardless of their background or \
                             circumstances.",
                            TextStyle::Body,
                        ),
                        text(
                            "Over the years, we've touched countless lives through our diverse \
                             range of programs and initiatives. From providing education to \
                             underprivileged children to implementing sustainable development \
                             projects in rural areas, our work spans across various sectors of \
                             society.",
                            TextStyle::Body,
                        ),
                    ],
                },
                card(
                    CardFill::Surface,
                    32,
                    vec![
                        text("Our Impact", TextStyle::CardTitle),
                        Block::IconList(vec![
                            (Icon::Heart, "1M+ Lives Impacted"),
                            (Icon::Book, "500+ Schools Supported"),
                            (Icon::Globe, "50+ Countries Reached"),
                            (Icon::Users, "10,000+ Volunteers"),
                        ]),
                    ],
                ),
            ],
        },
    }
}

fn mission() -> Section {
    Section {
        id: SectionId::Mission,
        heading: "Our Mission",
        body: card(
            CardFill::SurfaceAlt,
            32,
            vec![
                text(
                    "Green Hope NGO is committed to fostering sustainable development and \
                     social equity across the globe. Our mission is to empower communities, \
                     protect the environment, and create lasting positive change through \
                     innovative programs and partnerships.",
                    TextStyle::Lead,
                ),
                text("We strive to:", TextStyle::Lead),
                Block::Bullets(vec![
                    "Provide access to quality education for all",
                    "Promote sustainable agricultural practices",
                    "Enhance healthcare services in underserved areas",
                    "Advocate for environmental conservation and climate action",
                    "Foster economic empowerment through skills training and microfinance \
                     initiatives",
                ]),
            ],
        ),
    }
}

fn vision() -> Section {
    Section {
        id: SectionId::Vision,
        heading: "Our Vision",
        body: Block::Grid {
            columns: 3,
            gap: 32,
            children: vec![
                titled_card(
                    CardFill::Plain,
                    "A World of Equality",
                    "We envision a world where every individual has equal opportunities to \
                     thrive, regardless of their socio-economic background or geographical \
                     location.",
                ),
                titled_card(
                    CardFill::Plain,
                    "Sustainable Planet",
                    "Our vision includes a planet where human activities are in harmony with \
                     nature, ensuring the well-being of both current and future generations.",
                ),
                titled_card(
                    CardFill::Plain,
                    "Global Solidarity",
                    "We aspire to foster a global community united in its commitment to \
                     social justice, mutual understanding, and collective action for the \
                     greater good.",
                ),
            ],
        },
    }
}

fn work() -> Section {
    Section {
        id: SectionId::Work,
        heading: "Our Work",
        body: Block::Stack {
            gap: 32,
            children: vec![
                titled_card(
                    CardFill::SurfaceAlt,
                    "Education Initiatives",
                    "Our flagship program, \"Learn for Life,\" has established 200 schools in \
                     rural areas, providing quality education to over 50,000 children \
                     annually. We focus on inclusive education, integrating technology and \
                     traditional knowledge systems.",
                ),
                titled_card(
                    CardFill::SurfaceAlt,
                    "Sustainable Agriculture",
                    "Through our \"Green Farms\" project, we've trained 10,000 farmers in \
                     sustainable agricultural practices, increasing crop yields by 40% while \
                     reducing water usage and chemical inputs. This has led to improved food \
                     security and economic stability in rural communities.",
                ),
                titled_card(
                    CardFill::SurfaceAlt,
                    "Community Health",
                    "Our mobile health clinics have reached over 1 million people in remote \
                     areas, providing essential healthcare services, vaccinations, and health \
                     education. We've also established 50 community health centers, focusing \
                     on maternal and child health.",
                ),
                titled_card(
                    CardFill::SurfaceAlt,
                    "Environmental Conservation",
                    "Our \"Green Earth\" initiative has planted over 5 million trees, restored \
                     100,000 hectares of degraded land, and established 20 community-led \
                     conservation areas. We also run awareness programs on climate change and \
                     sustainable living practices.",
                ),
            ],
        },
    }
}

fn opportunities() -> Section {
    Section {
        id: SectionId::Opportunities,
        heading: "Opportunities",
        body: Block::Grid {
            columns: 2,
            gap: 32,
            children: vec![
                card(
                    CardFill::Plain,
                    24,
                    vec![
                        text("Scholarships", TextStyle::CardTitle),
                        Block::Entries(vec![
                            Entry {
                                icon: Icon::Book,
                                title: "Green Futures Scholarship",
                                text: "Full-ride scholarship for underprivileged students \
                                       pursuing environmental sciences or sustainable \
                                       development studies.",
                            },
                            Entry {
                                icon: Icon::Users,
                                title: "Community Leader Grant",
                                text: "Financial support for individuals driving positive \
                                       change in their communities through innovative social \
                                       projects.",
                            },
                        ]),
                    ],
                ),
                card(
                    CardFill::Plain,
                    24,
                    vec![
                        text("Job Openings", TextStyle::CardTitle),
                        Block::Entries(vec![
                            Entry {
                                icon: Icon::Globe,
                                title: "International Program Coordinator",
                                text: "Manage and expand our global initiatives. 5+ years of \
                                       NGO experience required. Fluency in multiple languages \
                                       is a plus.",
                            },
                            Entry {
                                icon: Icon::Heart,
                                title: "Community Health Specialist",
                                text: "Lead our health education programs in rural areas. \
                                       Medical background preferred. Experience in public \
                                       health initiatives is a must.",
                            },
                        ]),
                    ],
                ),
            ],
        },
    }
}

fn footer() -> Block {
    Block::Grid {
        columns: 3,
        gap: 32,
        children: vec![
            Block::Stack {
                gap: 8,
                children: vec![
                    text("Contact Us", TextStyle::FooterTitle),
                    text("Email: info@greenhopengo.org", TextStyle::FooterText),
                    text("Phone: +1 (555) 123-4567", TextStyle::FooterText),
                    text(
                        "Address: 123 Hope Street, Global City, 12345",
                        TextStyle::FooterText,
                    ),
                ],
            },
            Block::Stack {
                gap: 8,
                children: vec![
                    text("Quick Links", TextStyle::FooterTitle),
                    Block::Links(vec!["Donate", "Volunteer", "Annual Report", "Privacy Policy"]),
                ],
            },
            Block::Stack {
                gap: 8,
                children: vec![
                    text("Follow Us", TextStyle::FooterTitle),
                    Block::Links(vec!["Facebook", "Twitter", "Instagram"]),
                ],
            },
        ],
    }
}
