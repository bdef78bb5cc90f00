use folio_protocol::{
    About, Contact, Content, ProfileInfo, ProjectEntry, ProjectImage, SharedStr, Side,
    TimelineEntry,
};

fn strs(items: &[&str]) -> Vec<SharedStr> {
    items.iter().copied().map(SharedStr::from).collect()
}

fn link(url: &str) -> Option<SharedStr> {
    (!url.is_empty()).then(|| SharedStr::from(url))
}

/// The content shipped with the site.
pub fn reference_content() -> Content {
    Content {
        profile: ProfileInfo {
            name: "Daniel Le".into(),
            headline: "Computer Science Student".into(),
            portrait: "/IMG_6880.PNG".into(),
            github_url: "https://github.com/Danie1Le".into(),
            linkedin_url: "https://www.linkedin.com/in/danie1-le/".into(),
            email: "danielle8262005@gmail.com".into(),
        },
        about: About {
            heading: "About Me".into(),
            subheading: "Computer Science Student & Developer".into(),
            paragraphs: strs(&[
                "I'm a passionate Computer Science student with a love for creating innovative \
                 solutions and learning new technologies. My journey in tech started with being \
                 curious and uncertain about the career I wanted to pursue. I've been put into \
                 intriguing projects that incorporate AI, Machine Learning, and Web Development, \
                 which gave me a passion for the field and evolved into a drive to build \
                 meaningful applications that solve real-world problems.",
                "When I'm not coding, you can find me exploring new technologies, going to the \
                 gym, playing video games, or picking up new hobbies. I want to be a continuous \
                 learner and be part of interesting projects that help not only myself but \
                 others as well.",
            ]),
            interests: strs(&[
                "Artificial Intelligence",
                "Machine Learning",
                "Web Development",
                "Software Engineering",
            ]),
        },
        timeline: vec![
            TimelineEntry {
                title: "Software Developer Intern".into(),
                organization: "ResVR".into(),
                period: "May 2025 - Aug 2025".into(),
                location: "Remote".into(),
                summary: "Built an AI-powered virtual tour system using LLMs and real-time video \
                          streaming."
                    .into(),
                details: strs(&[
                    "Developed an AI-powered virtual tour system converting natural language to \
                     real-time video responses using AI avatars and the Gemma3 LLM.",
                    "Developed a backend model to interpret user commands and a frontend model \
                     to generate natural language responses used as video scripts.",
                    "Integrated 3D avatar video generation using HeyGen to deliver dynamic, \
                     lifelike responses based on LLM output.",
                    "Implemented real-time video streaming with asynchronous generation, status \
                     polling, and dynamic video switching.",
                    "Created a responsive web interface with speech recognition, optimized video \
                     processing, and an interactive demo page.",
                ]),
                skills: strs(&["AI", "LLM", "HeyGen"]),
                side: Side::Right,
                is_current: true,
            },
            TimelineEntry {
                title: "Machine Learning Researcher".into(),
                organization: "CognitiveABM".into(),
                period: "Jan 2024 - May 2025".into(),
                location: "Portland, Oregon".into(),
                summary: "Helped develop AI agents to simulate animal behavior using .NET and C#."
                    .into(),
                details: strs(&[
                    "Helped develop an AI project using .NET and C# to create agents that \
                     emulate the behavioral patterns of animals.",
                    "Created varied simulated landscapes to evaluate agent behavior across \
                     dynamic and challenging environments.",
                    "Built landscapes that deploy different environments on agents to assess \
                     performance.",
                    "Developed a real-time system to classify agents by elevation behavior as \
                     Climbers, Descenders, or Collectors.",
                    "Contributed to weekly scrum meetings on bug fixes and optimizations.",
                    "Presented project goals, technical development, and research findings on \
                     Founder's Day.",
                ]),
                skills: strs(&[".NET", "C#", "AI", "Simulation", "Agile"]),
                side: Side::Left,
                is_current: false,
            },
        ],
        projects: vec![
            ProjectEntry {
                title: "NBA Prediction Model".into(),
                description: "AI-powered NBA game predictor using XGBoost and team statistics, \
                              achieving 80%+ accuracy with an interactive web interface."
                    .into(),
                image: ProjectImage::Single("/NBA_predict.png".into()),
                tech: strs(&[
                    "Python",
                    "XGBoost",
                    "Scikit-learn",
                    "Streamlit",
                    "Plotly",
                    "Pandas",
                    "NumPy",
                ]),
                github: link("https://github.com/Danie1Le/NBA-Predict"),
                live: link("https://nba-predict.streamlit.app/"),
            },
            ProjectEntry {
                title: "AI ChatBot".into(),
                description: "AI chatbot for nursing students to practice diagnostic skills, \
                              using real-time chat and LLM-powered responses."
                    .into(),
                image: ProjectImage::Single("/Ai chatBot.png".into()),
                tech: strs(&["JavaScript", "HTML", "CSS", "LangChain", "DocArray", "Jest"]),
                github: None,
                live: None,
            },
            ProjectEntry {
                title: "Expense Tracker".into(),
                description: "Web app to manage and visualize expenses, with real-time sync and \
                              interactive charts."
                    .into(),
                image: ProjectImage::Single("/Expense budget.png".into()),
                tech: strs(&["JavaScript", "HTML", "CSS", "Firebase"]),
                github: None,
                live: link("https://danie1le.github.io/Expense-Budget/"),
            },
            ProjectEntry {
                title: "Type Racer".into(),
                description: "Typing speed game with real-time feedback and customizable word \
                              lists."
                    .into(),
                image: ProjectImage::Single("/Type Racer.png".into()),
                tech: strs(&["JavaScript", "HTML", "CSS"]),
                github: None,
                live: link("https://danie1le.github.io/Type-Racer/"),
            },
            ProjectEntry {
                title: "Up the River Down the River".into(),
                description: "Android card game with dynamic scorekeeping and team collaboration."
                    .into(),
                image: ProjectImage::Single("/UptheRiverDowntheRiver.png".into()),
                tech: strs(&["Java", "Android Studio"]),
                github: link("https://github.com/divPak9876/UpDownRiver"),
                live: None,
            },
            ProjectEntry {
                title: "Wind Turbine Project".into(),
                description: "Arduino-powered wind turbine model with LED indicators for wind \
                              speed."
                    .into(),
                image: ProjectImage::Pair("/turbine1.jpg".into(), "/turbine2.jpg".into()),
                tech: strs(&["C++", "Arduino"]),
                github: None,
                // Demo video is a site asset; hosts resolve it like any image path.
                live: link("/Media1.mp4"),
            },
        ],
        contact: Contact {
            heading: "Let's Work Together".into(),
            blurb: "Feel free to reach out! I'm always interested in new opportunities and \
                    exciting projects."
                .into(),
        },
    }
}
