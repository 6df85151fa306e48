//! The interior design career bank.

use super::{Choice, PsychometricQuestion, Question, TechnicalQuestion, WiscarQuestion};
use crate::{Category, Dimension, SkillType};

// =============================================================================
// PSYCHOMETRIC (8 items, points)
// =============================================================================

pub(super) const PSYCHOMETRIC: &[PsychometricQuestion] = &[
    Question {
        id: "q1",
        heading: None,
        prompt: "When walking into a room, I immediately notice...",
        tag: Category::Interest,
        options: &[
            Choice { id: "a", text: "How the furniture is arranged and the overall flow", payload: 5 },
            Choice { id: "b", text: "The color scheme and lighting", payload: 4 },
            Choice { id: "c", text: "The people in the room", payload: 2 },
            Choice { id: "d", text: "The temperature and comfort level", payload: 3 },
        ],
        explanation: None,
    },
    Question {
        id: "q2",
        heading: None,
        prompt: "I find myself most energized when...",
        tag: Category::Motivation,
        options: &[
            Choice { id: "a", text: "Creating something beautiful from scratch", payload: 5 },
            Choice { id: "b", text: "Solving complex problems", payload: 4 },
            Choice { id: "c", text: "Helping others achieve their goals", payload: 4 },
            Choice { id: "d", text: "Working with my hands", payload: 3 },
        ],
        explanation: None,
    },
    Question {
        id: "q3",
        heading: None,
        prompt: "When making decisions, I typically...",
        tag: Category::Personality,
        options: &[
            Choice { id: "a", text: "Trust my intuition and gut feelings", payload: 4 },
            Choice { id: "b", text: "Gather data and analyze options thoroughly", payload: 4 },
            Choice { id: "c", text: "Consider how it affects others", payload: 3 },
            Choice { id: "d", text: "Go with what feels right in the moment", payload: 2 },
        ],
        explanation: None,
    },
    Question {
        id: "q4",
        heading: None,
        prompt: "I prefer environments that are...",
        tag: Category::Interest,
        options: &[
            Choice { id: "a", text: "Aesthetically pleasing and well-designed", payload: 5 },
            Choice { id: "b", text: "Functional and efficient", payload: 4 },
            Choice { id: "c", text: "Comfortable and welcoming", payload: 3 },
            Choice { id: "d", text: "Simple and uncluttered", payload: 2 },
        ],
        explanation: None,
    },
    Question {
        id: "q5",
        heading: None,
        prompt: "When starting a creative project, I...",
        tag: Category::Cognitive,
        options: &[
            Choice { id: "a", text: "Sketch out multiple concepts first", payload: 5 },
            Choice { id: "b", text: "Research trends and gather inspiration", payload: 4 },
            Choice { id: "c", text: "Jump in and figure it out as I go", payload: 2 },
            Choice { id: "d", text: "Create a detailed plan and timeline", payload: 4 },
        ],
        explanation: None,
    },
    Question {
        id: "q6",
        heading: None,
        prompt: "I'm most motivated by work that...",
        tag: Category::Motivation,
        options: &[
            Choice { id: "a", text: "Allows me to express my creativity", payload: 5 },
            Choice { id: "b", text: "Makes a positive impact on others", payload: 4 },
            Choice { id: "c", text: "Provides financial stability", payload: 2 },
            Choice { id: "d", text: "Offers variety and new challenges", payload: 4 },
        ],
        explanation: None,
    },
    Question {
        id: "q7",
        heading: None,
        prompt: "When working with others, I tend to...",
        tag: Category::Personality,
        options: &[
            Choice { id: "a", text: "Take the lead and guide the vision", payload: 4 },
            Choice { id: "b", text: "Listen carefully to understand their needs", payload: 5 },
            Choice { id: "c", text: "Contribute ideas and collaborate equally", payload: 4 },
            Choice { id: "d", text: "Prefer to work independently", payload: 2 },
        ],
        explanation: None,
    },
    Question {
        id: "q8",
        heading: None,
        prompt: "I learn best when...",
        tag: Category::Cognitive,
        options: &[
            Choice { id: "a", text: "I can see visual examples and demonstrations", payload: 5 },
            Choice { id: "b", text: "I can practice hands-on activities", payload: 4 },
            Choice { id: "c", text: "Information is explained step-by-step", payload: 3 },
            Choice { id: "d", text: "I can discuss concepts with others", payload: 3 },
        ],
        explanation: None,
    },
];

// =============================================================================
// TECHNICAL (8 items, correctness)
// =============================================================================

pub(super) const TECHNICAL: &[TechnicalQuestion] = &[
    Question {
        id: "t1",
        heading: Some("Spatial Reasoning"),
        prompt: "If you're looking at a room from above (bird's eye view), and you see a rectangular sofa against the left wall, where would you place a coffee table for optimal flow?",
        tag: SkillType::Spatial,
        options: &[
            Choice { id: "a", text: "Directly in front of the sofa, 18 inches away", payload: true },
            Choice { id: "b", text: "Against the opposite wall", payload: false },
            Choice { id: "c", text: "In the corner of the room", payload: false },
            Choice { id: "d", text: "Touching the front of the sofa", payload: false },
        ],
        explanation: Some("18 inches provides comfortable legroom while maintaining easy access to the table."),
    },
    Question {
        id: "t2",
        heading: Some("Technical Knowledge"),
        prompt: "Which software is primarily used by interior designers for creating floor plans and 3D visualizations?",
        tag: SkillType::Technical,
        options: &[
            Choice { id: "a", text: "Microsoft Excel", payload: false },
            Choice { id: "b", text: "AutoCAD or SketchUp", payload: true },
            Choice { id: "c", text: "Adobe Photoshop only", payload: false },
            Choice { id: "d", text: "PowerPoint", payload: false },
        ],
        explanation: Some("AutoCAD and SketchUp are industry-standard tools for technical drawings and 3D modeling."),
    },
    Question {
        id: "t3",
        heading: Some("Numerical Skills"),
        prompt: "A client has a budget of $15,000 for furniture. If furniture typically costs $25 per square foot, what's the maximum room size they can furnish?",
        tag: SkillType::Numerical,
        options: &[
            Choice { id: "a", text: "400 square feet", payload: false },
            Choice { id: "b", text: "500 square feet", payload: false },
            Choice { id: "c", text: "600 square feet", payload: true },
            Choice { id: "d", text: "750 square feet", payload: false },
        ],
        explanation: Some("$15,000 ÷ $25 per sq ft = 600 square feet maximum coverage."),
    },
    Question {
        id: "t4",
        heading: Some("Material Knowledge"),
        prompt: "Which material would be LEAST suitable for a high-traffic commercial entrance floor?",
        tag: SkillType::Technical,
        options: &[
            Choice { id: "a", text: "Porcelain tile", payload: false },
            Choice { id: "b", text: "Natural stone", payload: false },
            Choice { id: "c", text: "Plush carpet", payload: true },
            Choice { id: "d", text: "Polished concrete", payload: false },
        ],
        explanation: Some("Plush carpet shows wear quickly and is difficult to clean in high-traffic areas."),
    },
    Question {
        id: "t5",
        heading: Some("Situational Judgment"),
        prompt: "A client loves a specific expensive wallpaper that exceeds their budget. What's the best approach?",
        tag: SkillType::Situational,
        options: &[
            Choice { id: "a", text: "Tell them they can't afford it", payload: false },
            Choice { id: "b", text: "Suggest using it as an accent wall to reduce cost", payload: true },
            Choice { id: "c", text: "Recommend going over budget", payload: false },
            Choice { id: "d", text: "Choose a different wallpaper without consulting them", payload: false },
        ],
        explanation: Some("An accent wall achieves the desired look while respecting budget constraints."),
    },
    Question {
        id: "t6",
        heading: Some("Color Theory"),
        prompt: "Which color combination creates a complementary color scheme?",
        tag: SkillType::Technical,
        options: &[
            Choice { id: "a", text: "Blue and green", payload: false },
            Choice { id: "b", text: "Red and pink", payload: false },
            Choice { id: "c", text: "Blue and orange", payload: true },
            Choice { id: "d", text: "Yellow and green", payload: false },
        ],
        explanation: Some("Complementary colors are opposite on the color wheel - blue and orange are direct opposites."),
    },
    Question {
        id: "t7",
        heading: Some("Space Planning"),
        prompt: "In a 12x14 foot living room, what's the minimum walking space you should maintain around furniture?",
        tag: SkillType::Spatial,
        options: &[
            Choice { id: "a", text: "12 inches", payload: false },
            Choice { id: "b", text: "24 inches", payload: false },
            Choice { id: "c", text: "36 inches", payload: true },
            Choice { id: "d", text: "48 inches", payload: false },
        ],
        explanation: Some("36 inches (3 feet) is the standard minimum for comfortable navigation around furniture."),
    },
    Question {
        id: "t8",
        heading: Some("Project Management"),
        prompt: "Your furniture delivery is delayed by 3 weeks, but the client's event is in 2 weeks. What do you do first?",
        tag: SkillType::Situational,
        options: &[
            Choice { id: "a", text: "Wait and hope it arrives early", payload: false },
            Choice { id: "b", text: "Immediately contact the client to discuss alternatives", payload: true },
            Choice { id: "c", text: "Cancel the order and start over", payload: false },
            Choice { id: "d", text: "Blame the supplier", payload: false },
        ],
        explanation: Some("Transparent communication allows you to work together on solutions like rental furniture or timeline adjustments."),
    },
];

// =============================================================================
// WISCAR (12 items, points, two per dimension)
// =============================================================================

pub(super) const WISCAR: &[WiscarQuestion] = &[
    Question {
        id: "w1",
        heading: None,
        prompt: "How do you typically handle long-term projects that require sustained effort?",
        tag: Dimension::Will,
        options: &[
            Choice { id: "a", text: "I maintain steady progress and see projects through to completion", payload: 5 },
            Choice { id: "b", text: "I work in bursts but usually finish what I start", payload: 4 },
            Choice { id: "c", text: "I sometimes lose motivation partway through", payload: 2 },
            Choice { id: "d", text: "I prefer short-term tasks with quick results", payload: 1 },
        ],
        explanation: None,
    },
    Question {
        id: "w2",
        heading: None,
        prompt: "When facing a design challenge that seems overwhelming, I typically:",
        tag: Dimension::Will,
        options: &[
            Choice { id: "a", text: "Break it down into smaller, manageable steps", payload: 5 },
            Choice { id: "b", text: "Push through with determination", payload: 4 },
            Choice { id: "c", text: "Take breaks and come back to it later", payload: 3 },
            Choice { id: "d", text: "Seek help or guidance immediately", payload: 2 },
        ],
        explanation: None,
    },
    Question {
        id: "i1",
        heading: None,
        prompt: "How often do you find yourself browsing design magazines, websites, or social media for inspiration?",
        tag: Dimension::Interest,
        options: &[
            Choice { id: "a", text: "Daily - it's a natural part of my routine", payload: 5 },
            Choice { id: "b", text: "Several times a week", payload: 4 },
            Choice { id: "c", text: "Occasionally, when I need ideas", payload: 3 },
            Choice { id: "d", text: "Rarely, only when specifically looking for something", payload: 2 },
        ],
        explanation: None,
    },
    Question {
        id: "i2",
        heading: None,
        prompt: "When visiting a new space (restaurant, hotel, office), I find myself:",
        tag: Dimension::Interest,
        options: &[
            Choice { id: "a", text: "Automatically analyzing the design choices and thinking how I'd improve them", payload: 5 },
            Choice { id: "b", text: "Noticing and appreciating good design elements", payload: 4 },
            Choice { id: "c", text: "Occasionally commenting on the decor", payload: 3 },
            Choice { id: "d", text: "Primarily focused on the function rather than aesthetics", payload: 2 },
        ],
        explanation: None,
    },
    Question {
        id: "s1",
        heading: None,
        prompt: "Which of these creative skills do you currently possess or have experience with?",
        tag: Dimension::Skill,
        options: &[
            Choice { id: "a", text: "Drawing, sketching, or digital design tools", payload: 5 },
            Choice { id: "b", text: "Photography or visual composition", payload: 4 },
            Choice { id: "c", text: "Crafts, DIY projects, or hands-on creation", payload: 3 },
            Choice { id: "d", text: "Limited creative experience but eager to learn", payload: 2 },
        ],
        explanation: None,
    },
    Question {
        id: "s2",
        heading: None,
        prompt: "How comfortable are you with technology and learning new software?",
        tag: Dimension::Skill,
        options: &[
            Choice { id: "a", text: "Very comfortable - I quickly adapt to new tools", payload: 5 },
            Choice { id: "b", text: "Moderately comfortable with guidance", payload: 4 },
            Choice { id: "c", text: "Somewhat hesitant but willing to learn", payload: 3 },
            Choice { id: "d", text: "Prefer to avoid complex technology", payload: 1 },
        ],
        explanation: None,
    },
    Question {
        id: "c1",
        heading: None,
        prompt: "When solving spatial problems (like rearranging furniture), I:",
        tag: Dimension::Cognitive,
        options: &[
            Choice { id: "a", text: "Easily visualize different arrangements in my mind", payload: 5 },
            Choice { id: "b", text: "Sketch or draw out possibilities", payload: 4 },
            Choice { id: "c", text: "Try different physical arrangements", payload: 3 },
            Choice { id: "d", text: "Find it challenging to envision spatial relationships", payload: 2 },
        ],
        explanation: None,
    },
    Question {
        id: "c2",
        heading: None,
        prompt: "How do you approach complex problems that have multiple possible solutions?",
        tag: Dimension::Cognitive,
        options: &[
            Choice { id: "a", text: "Consider multiple perspectives and weigh trade-offs systematically", payload: 5 },
            Choice { id: "b", text: "Research best practices and adapt them to my situation", payload: 4 },
            Choice { id: "c", text: "Try the most obvious solution first", payload: 3 },
            Choice { id: "d", text: "Prefer problems with clear, single correct answers", payload: 2 },
        ],
        explanation: None,
    },
    Question {
        id: "a1",
        heading: None,
        prompt: "When receiving constructive criticism on your work, you typically:",
        tag: Dimension::Ability,
        options: &[
            Choice { id: "a", text: "Welcome it as an opportunity to improve and ask follow-up questions", payload: 5 },
            Choice { id: "b", text: "Listen carefully and implement suggested changes", payload: 4 },
            Choice { id: "c", text: "Accept it but sometimes feel defensive initially", payload: 3 },
            Choice { id: "d", text: "Find criticism difficult to hear, even when constructive", payload: 2 },
        ],
        explanation: None,
    },
    Question {
        id: "a2",
        heading: None,
        prompt: "How do you prefer to learn new concepts or skills?",
        tag: Dimension::Ability,
        options: &[
            Choice { id: "a", text: "Through hands-on practice and experimentation", payload: 5 },
            Choice { id: "b", text: "Combination of theory and practical application", payload: 4 },
            Choice { id: "c", text: "Step-by-step instruction and guided practice", payload: 3 },
            Choice { id: "d", text: "Theoretical study before any practical application", payload: 2 },
        ],
        explanation: None,
    },
    Question {
        id: "r1",
        heading: None,
        prompt: "Interior design often involves working with demanding clients and tight deadlines. How do you handle pressure?",
        tag: Dimension::RealWorld,
        options: &[
            Choice { id: "a", text: "I perform well under pressure and stay organized", payload: 5 },
            Choice { id: "b", text: "I can handle pressure with proper planning", payload: 4 },
            Choice { id: "c", text: "I manage but prefer less stressful environments", payload: 3 },
            Choice { id: "d", text: "High pressure situations make me anxious", payload: 2 },
        ],
        explanation: None,
    },
    Question {
        id: "r2",
        heading: None,
        prompt: "The interior design field often requires irregular hours, client meetings, and site visits. This work style:",
        tag: Dimension::RealWorld,
        options: &[
            Choice { id: "a", text: "Appeals to me - I prefer variety and flexibility", payload: 5 },
            Choice { id: "b", text: "Sounds manageable with good time management", payload: 4 },
            Choice { id: "c", text: "Concerns me but I could adapt", payload: 3 },
            Choice { id: "d", text: "Would be difficult for my lifestyle preferences", payload: 2 },
        ],
        explanation: None,
    },
];
