//! The static course catalog.
//!
//! Catalog records are compile-time data; browsing is in-memory filtering
//! over this table. Course ids are stable and have gaps (retired courses
//! keep their ids reserved).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    GenerativeAi,
    Pharma,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::GenerativeAi => "Generative AI",
            Category::Pharma => "Pharma",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "generative ai" => Some(Category::GenerativeAi),
            "pharma" => Some(Category::Pharma),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "beginner" => Some(Level::Beginner),
            "intermediate" => Some(Level::Intermediate),
            "advanced" => Some(Level::Advanced),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumWeek {
    pub week: u8,
    pub title: &'static str,
    pub duration: &'static str,
    pub topics: &'static [&'static str],
}

#[derive(Debug)]
pub struct Course {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub level: Level,
    pub duration: &'static str,
    pub rating: f32,
    pub students: u32,
    /// Price in whole rupees.
    pub price: u32,
    pub next_session: &'static str,
    pub is_live: bool,
    pub tags: &'static [&'static str],
    pub instructor: Instructor,
    pub co_instructor: Option<Instructor>,
    pub curriculum: &'static [CurriculumWeek],
}

/// Search/filter parameters for the catalog listing.
#[derive(Debug, Default)]
pub struct CourseFilter {
    pub query: Option<String>,
    pub level: Option<Level>,
    pub category: Option<Category>,
}

impl Course {
    fn matches(&self, filter: &CourseFilter) -> bool {
        let matches_query = match filter.query.as_deref() {
            None | Some("") => true,
            Some(query) => {
                let query = query.to_lowercase();
                self.title.to_lowercase().contains(&query)
                    || self.description.to_lowercase().contains(&query)
                    || self
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&query))
            }
        };

        matches_query
            && filter.level.is_none_or(|level| level == self.level)
            && filter
                .category
                .is_none_or(|category| category == self.category)
    }

    pub fn summary(&'static self) -> CourseSummary {
        CourseSummary {
            id: self.id,
            title: self.title,
            description: self.description,
            instructor: self.instructor.name,
            co_instructor: self.co_instructor.as_ref().map(|i| i.name),
            category: self.category.label(),
            level: self.level.label(),
            duration: self.duration,
            rating: self.rating,
            students: self.students,
            price: format_inr(self.price),
            next_session: self.next_session,
            is_live: self.is_live,
            tags: self.tags,
        }
    }

    pub fn detail(&'static self) -> CourseDetail {
        CourseDetail {
            id: self.id,
            title: self.title,
            description: self.description,
            category: self.category.label(),
            level: self.level.label(),
            duration: self.duration,
            rating: self.rating,
            students: self.students,
            price: format_inr(self.price),
            next_session: self.next_session,
            is_live: self.is_live,
            tags: self.tags,
            instructor: &self.instructor,
            co_instructor: self.co_instructor.as_ref(),
            curriculum: self.curriculum,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub instructor: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co_instructor: Option<&'static str>,
    pub category: &'static str,
    pub level: &'static str,
    pub duration: &'static str,
    pub rating: f32,
    pub students: u32,
    pub price: String,
    pub next_session: &'static str,
    pub is_live: bool,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetail {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub level: &'static str,
    pub duration: &'static str,
    pub rating: f32,
    pub students: u32,
    pub price: String,
    pub next_session: &'static str,
    pub is_live: bool,
    pub tags: &'static [&'static str],
    pub instructor: &'static Instructor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co_instructor: Option<&'static Instructor>,
    pub curriculum: &'static [CurriculumWeek],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPlan {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub amount: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<&'static str>,
}

pub fn all() -> &'static [Course] {
    CATALOG
}

pub fn find(id: u32) -> Option<&'static Course> {
    CATALOG.iter().find(|course| course.id == id)
}

pub fn search(filter: &CourseFilter) -> Vec<&'static Course> {
    CATALOG
        .iter()
        .filter(|course| course.matches(filter))
        .collect()
}

/// Quote options for a course: full payment plus 3- and 6-month EMI splits.
/// Installments round up, so the EMI totals can overshoot the list price by
/// a few rupees.
pub fn payment_plans(course: &Course) -> Vec<PaymentPlan> {
    let emi = |months: u32| course.price.div_ceil(months);

    vec![
        PaymentPlan {
            id: "single",
            title: "Single Payment",
            description: "Pay the full amount now",
            amount: course.price,
            total_amount: None,
            installments: None,
            savings: Some("Best Value"),
        },
        PaymentPlan {
            id: "emi3",
            title: "3 Month EMI",
            description: "Pay in 3 equal installments",
            amount: emi(3),
            total_amount: Some(emi(3) * 3),
            installments: Some(3),
            savings: None,
        },
        PaymentPlan {
            id: "emi6",
            title: "6 Month EMI",
            description: "Pay in 6 equal installments",
            amount: emi(6),
            total_amount: Some(emi(6) * 6),
            installments: Some(6),
            savings: None,
        },
    ]
}

/// Formats whole rupees with thousands separators, e.g. `₹16,999`.
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    out.push('₹');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

const SATISH: Instructor = Instructor {
    name: "Satish Karri",
    title: "AI Research Specialist",
    bio: "Satish Karri has extensive experience in AI research and generative models.",
    email: "satish.karri@futureos.edu",
};

const BALAJI: Instructor = Instructor {
    name: "Balaji Vuppuluri",
    title: "AI Technology Expert",
    bio: "Balaji Vuppuluri specializes in large language models and AI applications.",
    email: "balaji.vuppuluri@futureos.edu",
};

const SWATHI_EMAIL: &str = "swathi.uppadi@futureos.edu";

const SWATHI_CONTENT: Instructor = Instructor {
    name: "Swathi Uppadi",
    title: "AI Content Expert",
    bio: "Swathi Uppadi specializes in AI-powered content creation and digital marketing strategies.",
    email: SWATHI_EMAIL,
};

const SWATHI_ETHICS: Instructor = Instructor {
    name: "Swathi Uppadi",
    title: "AI Ethics Expert",
    bio: "Swathi Uppadi specializes in AI ethics, bias detection, and responsible AI deployment.",
    email: SWATHI_EMAIL,
};

const SWATHI_DRUG_DISCOVERY: Instructor = Instructor {
    name: "Swathi Uppadi",
    title: "AI Drug Discovery Expert",
    bio: "Swathi Uppadi specializes in AI applications in drug discovery and pharmaceutical research.",
    email: SWATHI_EMAIL,
};

const SWATHI_REGULATORY: Instructor = Instructor {
    name: "Swathi Uppadi",
    title: "Regulatory Affairs AI Expert",
    bio: "Swathi Uppadi specializes in AI applications in regulatory affairs and compliance automation.",
    email: SWATHI_EMAIL,
};

const SWATHI_SALES: Instructor = Instructor {
    name: "Swathi Uppadi",
    title: "Pharma Sales AI Expert",
    bio: "Swathi Uppadi specializes in AI applications in pharmaceutical sales and customer relationship management.",
    email: SWATHI_EMAIL,
};

const SWATHI_MARKETING: Instructor = Instructor {
    name: "Swathi Uppadi",
    title: "Pharma Marketing AI Expert",
    bio: "Swathi Uppadi specializes in AI applications in pharmaceutical marketing and campaign optimization.",
    email: SWATHI_EMAIL,
};

const SWATHI_WRITING: Instructor = Instructor {
    name: "Swathi Uppadi",
    title: "Medical Writing AI Expert",
    bio: "Swathi Uppadi specializes in AI-assisted medical writing and regulatory document creation.",
    email: SWATHI_EMAIL,
};

const SWATHI_PHARMACOVIGILANCE: Instructor = Instructor {
    name: "Swathi Uppadi",
    title: "Pharmacovigilance AI Expert",
    bio: "Swathi Uppadi specializes in AI applications for pharmacovigilance and safety signal detection.",
    email: SWATHI_EMAIL,
};

const SWATHI_PATENTS: Instructor = Instructor {
    name: "Swathi Uppadi",
    title: "Patent & IP AI Expert",
    bio: "Swathi Uppadi specializes in AI applications for patent search, IP management, and automated drafting.",
    email: SWATHI_EMAIL,
};

static CATALOG: &[Course] = &[
    Course {
        id: 1,
        title: "Generative AI Fundamentals",
        description: "Master the foundations of generative AI including large language models, prompt engineering, and AI applications.",
        category: Category::GenerativeAi,
        level: Level::Beginner,
        duration: "8 weeks",
        rating: 4.9,
        students: 342,
        price: 16_999,
        next_session: "Sep 15, 2025",
        is_live: true,
        tags: &["GPT", "Prompt Engineering", "OpenAI", "LLMs"],
        instructor: SATISH,
        co_instructor: Some(BALAJI),
        curriculum: &[
            CurriculumWeek { week: 1, title: "Introduction to Generative AI", duration: "4 hours", topics: &["What is Generative AI", "History and Evolution", "Key Applications", "Setting up Development Environment"] },
            CurriculumWeek { week: 2, title: "Understanding Large Language Models", duration: "5 hours", topics: &["Transformer Architecture", "GPT Models Overview", "BERT vs GPT", "Model Parameters and Scale"] },
            CurriculumWeek { week: 3, title: "Prompt Engineering Fundamentals", duration: "6 hours", topics: &["Prompt Design Principles", "Few-shot vs Zero-shot Learning", "Chain of Thought Prompting", "Best Practices"] },
            CurriculumWeek { week: 4, title: "Working with OpenAI APIs", duration: "5 hours", topics: &["API Setup and Authentication", "GPT-3.5 and GPT-4 Usage", "Fine-tuning Models", "Cost Optimization"] },
            CurriculumWeek { week: 5, title: "Advanced Prompt Techniques", duration: "6 hours", topics: &["Role-based Prompting", "Context Management", "Multi-step Reasoning", "Error Handling"] },
            CurriculumWeek { week: 6, title: "Building AI Applications", duration: "7 hours", topics: &["Chatbot Development", "Content Generation Systems", "Code Generation", "Integration Patterns"] },
            CurriculumWeek { week: 7, title: "AI Ethics and Safety", duration: "5 hours", topics: &["Bias in AI Models", "Responsible AI Development", "Content Moderation", "Privacy Considerations"] },
            CurriculumWeek { week: 8, title: "Capstone Project", duration: "8 hours", topics: &["Project Planning", "Implementation", "Testing and Deployment", "Presentation and Evaluation"] },
        ],
    },
    Course {
        id: 2,
        title: "Large Language Models (LLMs)",
        description: "Deep dive into training, fine-tuning, and deploying large language models for real-world applications.",
        category: Category::GenerativeAi,
        level: Level::Advanced,
        duration: "12 weeks",
        rating: 4.8,
        students: 189,
        price: 24_999,
        next_session: "Oct 8, 2025",
        is_live: false,
        tags: &["Transformers", "BERT", "Fine-tuning", "PyTorch"],
        instructor: SATISH,
        co_instructor: Some(BALAJI),
        curriculum: &[
            CurriculumWeek { week: 1, title: "LLM Architecture Deep Dive", duration: "6 hours", topics: &["Transformer Architecture", "Attention Mechanisms", "Positional Encoding", "Layer Normalization"] },
            CurriculumWeek { week: 2, title: "Training Large Models", duration: "8 hours", topics: &["Distributed Training", "Gradient Accumulation", "Mixed Precision Training", "Memory Optimization"] },
            CurriculumWeek { week: 3, title: "Pre-training Strategies", duration: "7 hours", topics: &["Data Preparation", "Tokenization", "Training Objectives", "Evaluation Metrics"] },
            CurriculumWeek { week: 4, title: "Fine-tuning Techniques", duration: "8 hours", topics: &["Task-specific Fine-tuning", "Parameter-efficient Fine-tuning", "LoRA and Adapters", "Instruction Tuning"] },
            CurriculumWeek { week: 5, title: "Model Optimization", duration: "7 hours", topics: &["Quantization", "Pruning", "Knowledge Distillation", "Model Compression"] },
            CurriculumWeek { week: 6, title: "Deployment Strategies", duration: "6 hours", topics: &["Model Serving", "Inference Optimization", "Scaling Solutions", "Cost Management"] },
            CurriculumWeek { week: 7, title: "Advanced Applications", duration: "8 hours", topics: &["Code Generation", "Multimodal Models", "Reasoning Tasks", "Domain Adaptation"] },
            CurriculumWeek { week: 8, title: "Research Frontiers", duration: "6 hours", topics: &["Latest Architectures", "Emergent Capabilities", "Future Directions", "Research Methodology"] },
            CurriculumWeek { week: 9, title: "Multimodal LLMs", duration: "7 hours", topics: &["Vision-Language Models", "CLIP and DALL-E Integration", "Video Understanding", "Audio Processing"] },
            CurriculumWeek { week: 10, title: "Agent-based Systems", duration: "8 hours", topics: &["LLM Agents", "Tool Usage", "Planning and Reasoning", "Multi-agent Collaboration"] },
            CurriculumWeek { week: 11, title: "Advanced Fine-tuning", duration: "7 hours", topics: &["RLHF", "Constitutional AI", "Red Teaming", "Safety Alignment"] },
            CurriculumWeek { week: 12, title: "Final Project", duration: "10 hours", topics: &["Custom LLM Implementation", "Performance Evaluation", "Deployment Pipeline", "Project Presentation"] },
        ],
    },
    Course {
        id: 3,
        title: "AI-Powered Content Creation",
        description: "Learn to create engaging content using AI tools like ChatGPT, DALL-E, and other generative AI platforms.",
        category: Category::GenerativeAi,
        level: Level::Beginner,
        duration: "6 weeks",
        rating: 4.7,
        students: 456,
        price: 12_999,
        next_session: "Nov 15, 2025",
        is_live: false,
        tags: &["ChatGPT", "DALL-E", "Content Creation", "Midjourney"],
        instructor: SATISH,
        co_instructor: Some(SWATHI_CONTENT),
        curriculum: &[
            CurriculumWeek { week: 1, title: "Content Creation Landscape", duration: "4 hours", topics: &["AI Content Tools Overview", "ChatGPT and GPT-4 Basics", "DALL-E and Image Generation", "Setting up Creative Workflows"] },
            CurriculumWeek { week: 2, title: "Mastering Text Content", duration: "5 hours", topics: &["Blog Post Creation", "Social Media Content", "Email Marketing Copy", "SEO-Optimized Writing"] },
            CurriculumWeek { week: 3, title: "Visual Content Creation", duration: "6 hours", topics: &["AI Image Generation", "Midjourney Mastery", "Canva AI Integration", "Brand Visual Consistency"] },
            CurriculumWeek { week: 4, title: "Video and Audio Content", duration: "5 hours", topics: &["AI Video Generation", "Voice Cloning and Synthesis", "Podcast Script Writing", "Music and Sound Effects"] },
            CurriculumWeek { week: 5, title: "Content Strategy and Automation", duration: "4 hours", topics: &["Content Calendar Planning", "Automated Publishing", "Performance Analytics", "A/B Testing Content"] },
            CurriculumWeek { week: 6, title: "Advanced Content Techniques", duration: "6 hours", topics: &["Multi-format Content Creation", "Interactive Content", "Personalization at Scale", "Portfolio Development"] },
        ],
    },
    Course {
        id: 4,
        title: "AI Chatbot Development",
        description: "Build intelligent conversational AI systems using modern frameworks and natural language processing.",
        category: Category::GenerativeAi,
        level: Level::Intermediate,
        duration: "10 weeks",
        rating: 4.6,
        students: 298,
        price: 19_999,
        next_session: "Dec 1, 2025",
        is_live: false,
        tags: &["NLP", "Dialogflow", "Rasa", "Conversational AI"],
        instructor: SATISH,
        co_instructor: Some(BALAJI),
        curriculum: &[
            CurriculumWeek { week: 1, title: "Conversational AI Fundamentals", duration: "6 hours", topics: &["Introduction to Chatbots", "Rule-based vs AI-powered bots", "NLP Basics for Conversations", "Intent Recognition and Entity Extraction"] },
            CurriculumWeek { week: 2, title: "Building with Dialogflow", duration: "7 hours", topics: &["Dialogflow Setup and Configuration", "Creating Intents and Entities", "Context Management", "Webhook Integration"] },
            CurriculumWeek { week: 3, title: "Advanced NLP for Chatbots", duration: "8 hours", topics: &["Sentiment Analysis in Conversations", "Multi-turn Dialogue Management", "Named Entity Recognition", "Language Understanding Models"] },
            CurriculumWeek { week: 4, title: "Rasa Framework Deep Dive", duration: "8 hours", topics: &["Rasa Core and NLU", "Custom Action Development", "Training Data Preparation", "Model Evaluation and Testing"] },
            CurriculumWeek { week: 5, title: "Integration and Deployment", duration: "7 hours", topics: &["Platform Integration (Slack, WhatsApp, Web)", "API Development for Chatbots", "Database Connectivity", "User Session Management"] },
            CurriculumWeek { week: 6, title: "Advanced Features", duration: "8 hours", topics: &["Voice-enabled Chatbots", "Multilingual Support", "Personalization and User Profiling", "Analytics and Insights"] },
            CurriculumWeek { week: 7, title: "Enterprise Chatbot Development", duration: "7 hours", topics: &["Security and Privacy", "Scalability Considerations", "Error Handling and Fallbacks", "Monitoring and Maintenance"] },
            CurriculumWeek { week: 8, title: "LLM-powered Chatbots", duration: "8 hours", topics: &["Integrating GPT models", "RAG for Knowledge-based Chatbots", "Fine-tuning for Specific Domains", "Cost Optimization Strategies"] },
            CurriculumWeek { week: 9, title: "Testing and Optimization", duration: "7 hours", topics: &["Conversation Flow Testing", "A/B Testing for Chatbots", "Performance Optimization", "User Experience Design"] },
            CurriculumWeek { week: 10, title: "Capstone Project", duration: "10 hours", topics: &["End-to-end Chatbot Development", "Project Deployment", "Performance Analysis", "Presentation and Demo"] },
        ],
    },
    Course {
        id: 5,
        title: "Prompt Engineering Mastery",
        description: "Master the art and science of prompt engineering to maximize AI model performance and creativity.",
        category: Category::GenerativeAi,
        level: Level::Intermediate,
        duration: "4 weeks",
        rating: 4.9,
        students: 567,
        price: 8_999,
        next_session: "Dec 15, 2025",
        is_live: true,
        tags: &["Prompt Design", "Chain of Thought", "Few-shot Learning"],
        instructor: SATISH,
        co_instructor: Some(SWATHI_CONTENT),
        curriculum: &[
            CurriculumWeek { week: 1, title: "Prompt Engineering Foundations", duration: "6 hours", topics: &["Anatomy of Effective Prompts", "Zero-shot vs Few-shot Learning", "Model Behavior and Limitations", "Prompt Structure and Components"] },
            CurriculumWeek { week: 2, title: "Advanced Prompting Techniques", duration: "8 hours", topics: &["Chain of Thought Prompting", "Tree of Thoughts Method", "Role-based Prompting", "Constitutional AI Principles"] },
            CurriculumWeek { week: 3, title: "Domain-Specific Applications", duration: "8 hours", topics: &["Prompting for Code Generation", "Creative Writing and Storytelling", "Data Analysis and Reasoning", "Technical Documentation"] },
            CurriculumWeek { week: 4, title: "Optimization and Best Practices", duration: "6 hours", topics: &["Prompt Iteration and Testing", "Cost-effective Prompting", "Prompt Libraries and Templates", "Final Project: Custom Prompt Suite"] },
        ],
    },
    Course {
        id: 7,
        title: "AI Ethics & Responsible AI",
        description: "Understanding ethical implications, bias mitigation, and responsible deployment of generative AI systems.",
        category: Category::GenerativeAi,
        level: Level::Intermediate,
        duration: "6 weeks",
        rating: 4.7,
        students: 189,
        price: 11_999,
        next_session: "Jan 15, 2026",
        is_live: false,
        tags: &["AI Ethics", "Bias Detection", "Responsible AI", "Fairness"],
        instructor: SWATHI_ETHICS,
        co_instructor: None,
        curriculum: &[
            CurriculumWeek { week: 1, title: "Foundations of AI Ethics", duration: "6 hours", topics: &["Ethical Frameworks for AI", "Historical Context and Case Studies", "Stakeholder Perspectives", "Regulatory Landscape"] },
            CurriculumWeek { week: 2, title: "Bias and Fairness in AI", duration: "7 hours", topics: &["Types of Bias in AI Systems", "Bias Detection Methods", "Fairness Metrics and Evaluation", "Mitigation Strategies"] },
            CurriculumWeek { week: 3, title: "Privacy and Security", duration: "7 hours", topics: &["Data Privacy in AI", "Differential Privacy", "Adversarial Attacks", "Security Best Practices"] },
            CurriculumWeek { week: 4, title: "Transparency and Explainability", duration: "6 hours", topics: &["Explainable AI (XAI)", "Interpretability Techniques", "Model Documentation", "Audit Trails"] },
            CurriculumWeek { week: 5, title: "Governance and Compliance", duration: "6 hours", topics: &["AI Governance Frameworks", "Regulatory Compliance", "Risk Assessment", "Ethical Review Processes"] },
            CurriculumWeek { week: 6, title: "Implementation and Practice", duration: "8 hours", topics: &["Building Ethical AI Teams", "Ethics in AI Development Lifecycle", "Case Study Analysis", "Final Project: Ethics Assessment"] },
        ],
    },
    Course {
        id: 8,
        title: "Building AI-Powered Applications",
        description: "End-to-end development of AI applications using modern frameworks, APIs, and deployment strategies.",
        category: Category::GenerativeAi,
        level: Level::Advanced,
        duration: "16 weeks",
        rating: 4.8,
        students: 145,
        price: 28_999,
        next_session: "Jul 27, 2025 (Live Session Started)",
        is_live: true,
        tags: &["API Integration", "MLOps", "Docker", "Cloud Deployment"],
        instructor: SATISH,
        co_instructor: Some(BALAJI),
        curriculum: &[
            CurriculumWeek { week: 1, title: "AI Application Architecture", duration: "8 hours", topics: &["System Design for AI Apps", "Microservices vs Monolithic", "API Design Patterns", "Data Flow Architecture"] },
            CurriculumWeek { week: 2, title: "Frontend Development for AI", duration: "8 hours", topics: &["React for AI Applications", "User Interface Design", "Real-time Data Visualization", "Interactive AI Components"] },
            CurriculumWeek { week: 3, title: "Backend Services", duration: "8 hours", topics: &["FastAPI for AI Backends", "Database Design for AI", "Authentication and Authorization", "API Rate Limiting"] },
            CurriculumWeek { week: 4, title: "AI Model Integration", duration: "8 hours", topics: &["Model Serving with FastAPI", "OpenAI API Integration", "Custom Model Deployment", "Model Versioning"] },
            CurriculumWeek { week: 5, title: "Data Pipeline Development", duration: "8 hours", topics: &["ETL for AI Applications", "Real-time Data Processing", "Vector Databases", "Data Validation"] },
            CurriculumWeek { week: 6, title: "Testing AI Applications", duration: "8 hours", topics: &["Unit Testing AI Components", "Integration Testing", "Model Performance Testing", "A/B Testing Framework"] },
            CurriculumWeek { week: 7, title: "Deployment Strategies", duration: "8 hours", topics: &["Docker for AI Applications", "Kubernetes Deployment", "CI/CD for AI", "Blue-Green Deployment"] },
            CurriculumWeek { week: 8, title: "Monitoring and Observability", duration: "8 hours", topics: &["Application Monitoring", "Model Performance Tracking", "Error Handling", "Logging and Alerting"] },
            CurriculumWeek { week: 9, title: "Scaling AI Applications", duration: "8 hours", topics: &["Horizontal Scaling", "Load Balancing", "Caching Strategies", "Performance Optimization"] },
            CurriculumWeek { week: 10, title: "Security in AI Applications", duration: "8 hours", topics: &["Secure API Design", "Data Encryption", "Input Validation", "Threat Modeling"] },
            CurriculumWeek { week: 11, title: "Cost Optimization", duration: "8 hours", topics: &["Resource Management", "Cost Monitoring", "Efficient Model Usage", "Infrastructure Optimization"] },
            CurriculumWeek { week: 12, title: "Advanced Features", duration: "8 hours", topics: &["Real-time AI Processing", "Webhook Integration", "Third-party API Integration", "Custom Analytics"] },
            CurriculumWeek { week: 13, title: "Project Planning", duration: "8 hours", topics: &["Requirements Analysis", "System Architecture Design", "Technology Stack Selection", "Project Timeline"] },
            CurriculumWeek { week: 14, title: "Project Development", duration: "12 hours", topics: &["Core Feature Implementation", "Frontend Development", "Backend Development", "Testing and Debugging"] },
            CurriculumWeek { week: 15, title: "Project Deployment", duration: "10 hours", topics: &["Production Deployment", "Performance Tuning", "User Acceptance Testing", "Documentation"] },
            CurriculumWeek { week: 16, title: "Project Presentation", duration: "8 hours", topics: &["Demo Preparation", "Presentation Skills", "Project Showcase", "Peer Review and Feedback"] },
        ],
    },
    Course {
        id: 9,
        title: "AI in Drug Discovery and Development",
        description: "Comprehensive course covering AI applications across the entire drug discovery pipeline from target identification to clinical trials.",
        category: Category::Pharma,
        level: Level::Advanced,
        duration: "12 weeks",
        rating: 4.9,
        students: 78,
        price: 32_999,
        next_session: "Feb 1, 2026",
        is_live: false,
        tags: &["Drug Discovery", "ADMET", "Virtual Screening", "Clinical AI"],
        instructor: SWATHI_DRUG_DISCOVERY,
        co_instructor: None,
        curriculum: &[
            CurriculumWeek { week: 1, title: "Basics of the drug discovery pipeline", duration: "6 hours", topics: &["Drug discovery and development", "Overview of drug discovery workflows", "Drug design strategies", "Conventional methods for drug discovery", "Riddles in drug discovery"] },
            CurriculumWeek { week: 2, title: "Introduction to AI in drug discovery and development", duration: "6 hours", topics: &["History and evolution of AI in drug discovery", "Overview of AI technologies", "Key applications of AI across the pipeline", "Available AI tools and platforms", "Advantages of AI integration in drug discovery"] },
            CurriculumWeek { week: 3, title: "Fundamentals of AI and ML techniques", duration: "7 hours", topics: &["Introduction to machine learning concepts", "Overview of neural networks", "Feature engineering and data preprocessing", "Evaluation metrics for AI models", "Introduction to Python libraries for AI in drug discovery"] },
            CurriculumWeek { week: 4, title: "AI in target identification, prediction and validation", duration: "8 hours", topics: &["Introduction to biological targets", "Basics of target identification and validation", "Omics data integration for target discovery", "Binding site and protein structure prediction with AI", "Hands-on tutorial: Protein structure prediction"] },
            CurriculumWeek { week: 5, title: "AI in high throughput virtual screening and lead identification", duration: "8 hours", topics: &["Introduction and approaches to virtual screening", "AI tools for virtual screening", "AI assisted molecular docking", "Workflow of high-throughput virtual screening", "Hands-on tutorial: AI-assisted molecular docking"] },
            CurriculumWeek { week: 6, title: "AI in lead optimization and drug-target interaction", duration: "8 hours", topics: &["Basics of lead optimization", "AI for drug-target interaction studies", "QSAR modelling", "Molecular dynamics simulations", "Hands-on tutorial: Molecular dynamics trajectory analysis"] },
            CurriculumWeek { week: 7, title: "ADMET predictive modelling in drug discovery", duration: "7 hours", topics: &["Introduction to ADMET Properties", "Importance in lead optimization", "Conventional methods for ADMET prediction", "Open available resources for ADMET prediction", "Hands-on tutorial: AI-enabled ADMET prediction"] },
            CurriculumWeek { week: 8, title: "AI in clinical phase", duration: "6 hours", topics: &["Overview of clinical trials", "Patient recruitment, stratification, and retention", "Clinical trial protocol design and optimization", "Predicting outcomes of clinical trials with AI", "Data collection and monitoring for regulatory submissions"] },
            CurriculumWeek { week: 9, title: "De Novo Drug Design using Generative AI", duration: "8 hours", topics: &["Introduction to Generative AI in drug design", "Deep Generative Models for drug design (GAN, GNN, RNN, VAE etc.)", "Benchmarking Generative Models for drug design", "Molecule optimization with Generative AI", "Hands-on tutorial: AI-powered de novo drug design"] },
            CurriculumWeek { week: 10, title: "Advanced concepts: Precision medicine, Network pharmacology and Drug repurposing", duration: "7 hours", topics: &["AI in genomics for personalized treatments", "AI in real-time monitoring and feedback", "Overview and data sources for AI in drug repurposing", "Integrating multi-target drug discovery", "Network pharmacology with AI"] },
            CurriculumWeek { week: 11, title: "Case studies, challenges, future directions, and resources", duration: "6 hours", topics: &["Public AI resources for drug discovery", "Examples of notable successful case studies", "Challenges in modern drug discovery realm", "Regulatory considerations for AI implementation in drug development", "Future outlook: Explainable artificial intelligence, (XAI) and other emerging technologies in drug discovery"] },
            CurriculumWeek { week: 12, title: "Hands-on sessions (Advanced workflow implementation)", duration: "10 hours", topics: &["Molecular structure representation", "ML-assisted solubility prediction", "AI-assisted bioactivity prediction", "Pharmacophore-based ultra-large virtual screening", "Similarity based virtual screening"] },
        ],
    },
    Course {
        id: 11,
        title: "GenAI in Regulatory Affairs",
        description: "Learn AI-driven regulatory document automation, compliance monitoring, and regulatory intelligence extraction.",
        category: Category::Pharma,
        level: Level::Intermediate,
        duration: "4 weeks",
        rating: 4.7,
        students: 98,
        price: 7_000,
        next_session: "Oct 1, 2025",
        is_live: false,
        tags: &["Regulatory Affairs", "Compliance", "Document Automation", "NLP"],
        instructor: SWATHI_REGULATORY,
        co_instructor: None,
        curriculum: &[
            CurriculumWeek { week: 1, title: "Introduction to Regulatory Affairs & Compliance Basics", duration: "6 hours", topics: &["Introduction to the drug approval lifecycle", "Regulatory bodies (CDSCO, USFDA, EMA) and their mandates", "Role of regulatory affairs in pharma", "Regulatory documentation and timelines", "Challenges in current regulatory processes"] },
            CurriculumWeek { week: 2, title: "AI in Regulatory Intelligence & Document Automation", duration: "7 hours", topics: &["AI tools for regulatory document drafting", "Automating CTD/eCTD submissions", "NLP-based label comparison and version control", "RAG for regulatory intelligence extraction", "Hands-on: Summarize regulatory guidelines using ChatGPT"] },
            CurriculumWeek { week: 3, title: "AI in Compliance Monitoring & Risk Assessment", duration: "8 hours", topics: &["Compliance signal detection with AI", "Risk-based monitoring using predictive models", "Detecting deviations using GenAI workflows", "Structured data extraction from inspection reports", "Hands-on: AI-assisted deviation tracking"] },
            CurriculumWeek { week: 4, title: "Project + LinkedIn Optimization", duration: "5 hours", topics: &["Final project: Build a mock AI-driven regulatory dossier", "Peer review and improvement", "LinkedIn profile structuring for Regulatory + GenAI roles", "Resume boost with GenAI skills", "Certification and showcase"] },
        ],
    },
    Course {
        id: 12,
        title: "GenAI in Pharma Sales",
        description: "Transform pharma sales with AI-powered lead scoring, personalized communication, and territory planning strategies.",
        category: Category::Pharma,
        level: Level::Beginner,
        duration: "4 weeks",
        rating: 4.6,
        students: 234,
        price: 7_000,
        next_session: "Oct 15, 2025",
        is_live: false,
        tags: &["Pharma Sales", "Lead Scoring", "CRM", "Personalization"],
        instructor: SWATHI_SALES,
        co_instructor: None,
        curriculum: &[
            CurriculumWeek { week: 1, title: "Pharma Sales Landscape & Challenges", duration: "6 hours", topics: &["Overview of pharma sales lifecycle", "Stakeholders: Doctors, chemists, hospitals, institutions", "Key account management strategies", "Sales funnel and conversion metrics", "Challenges in current sales workflows"] },
            CurriculumWeek { week: 2, title: "AI Tools for Sales Intelligence & CRM Enhancement", duration: "7 hours", topics: &["Using AI for lead scoring and targeting HCPs", "NLP for summarizing medical literature into sales-ready pitches", "Predicting doctor behavior using GenAI", "AI-driven territory planning and segmentation", "Hands-on: Build a sales pitch using ChatGPT"] },
            CurriculumWeek { week: 3, title: "AI-Powered Communication & Personalization", duration: "8 hours", topics: &["Using AI to generate email, SMS, WhatsApp campaigns", "Personalizing medical reps content with GenAI", "Voice-based GenAI assistants for sales teams", "Using GenAI to respond to objections and queries", "Hands-on: Generate a personalized sales script"] },
            CurriculumWeek { week: 4, title: "Project + LinkedIn Optimization", duration: "5 hours", topics: &["Final project: AI-personalized omnichannel sales strategy for a new drug", "Peer feedback and refinement", "LinkedIn profile tips for pharma sales + GenAI roles", "Resume revamp using quantifiable AI impact", "Certification"] },
        ],
    },
    Course {
        id: 13,
        title: "GenAI in Pharma Marketing",
        description: "Create AI-driven marketing campaigns, content generation, and predictive analytics for pharmaceutical marketing.",
        category: Category::Pharma,
        level: Level::Beginner,
        duration: "4 weeks",
        rating: 4.7,
        students: 187,
        price: 7_000,
        next_session: "Nov 1, 2025",
        is_live: false,
        tags: &["Pharma Marketing", "Content Generation", "Predictive Analytics", "ROI"],
        instructor: SWATHI_MARKETING,
        co_instructor: None,
        curriculum: &[
            CurriculumWeek { week: 1, title: "Foundations of Pharma Marketing", duration: "6 hours", topics: &["Overview of pharma marketing channels", "Differentiating B2B and B2C in pharma", "Understanding HCP and patient personas", "Regulatory-compliant messaging", "Challenges in traditional pharma marketing"] },
            CurriculumWeek { week: 2, title: "AI-Driven Content Creation & Campaign Planning", duration: "7 hours", topics: &["Using GenAI for visual and text campaign generation", "Personalized content for HCPs and patients", "Social media content creation with GenAI", "Campaign calendar generation using AI tools", "Hands-on: Generate a content plan using ChatGPT"] },
            CurriculumWeek { week: 3, title: "Predictive Analytics & ROI Optimization", duration: "8 hours", topics: &["Target audience segmentation using AI", "Forecasting campaign effectiveness", "A/B testing and response prediction", "Tools for measuring ROI using GenAI", "Hands-on: Build a targeted marketing strategy with AI support"] },
            CurriculumWeek { week: 4, title: "Project + LinkedIn Optimization", duration: "5 hours", topics: &["Final project: AI-generated launch plan for a new therapy", "Presentation of digital marketing kit", "LinkedIn strategy for marketing professionals with GenAI focus", "Resume enhancement tips with GenAI skills", "Certification"] },
        ],
    },
    Course {
        id: 14,
        title: "GenAI in Medical Writing",
        description: "Master AI-assisted medical writing for regulatory documents, clinical summaries, and compliance automation.",
        category: Category::Pharma,
        level: Level::Intermediate,
        duration: "4 weeks",
        rating: 4.8,
        students: 156,
        price: 7_000,
        next_session: "Nov 15, 2025",
        is_live: false,
        tags: &["Medical Writing", "Regulatory Documents", "Clinical Summaries", "Compliance"],
        instructor: SWATHI_WRITING,
        co_instructor: None,
        curriculum: &[
            CurriculumWeek { week: 1, title: "Introduction to Medical Writing", duration: "6 hours", topics: &["Types of medical writing: Regulatory, Scientific, Promotional", "Key documents: CSR, ICF, IB, Protocols, Manuscripts", "Understanding target audiences (regulators, HCPs, patients)", "Common challenges: Consistency, compliance, clarity", "Ethical writing and plagiarism"] },
            CurriculumWeek { week: 2, title: "Leveraging GenAI for Drafting & Summarizing", duration: "7 hours", topics: &["Using GenAI to draft clinical trial summaries and case reports", "Literature summarization with NLP tools", "Rewriting scientific texts for different audiences", "Head-to-head comparisons using RAG models", "Hands-on: Generate a clinical trial summary with ChatGPT"] },
            CurriculumWeek { week: 3, title: "Editing, Formatting & Compliance Automation", duration: "8 hours", topics: &["Grammar, readability, and tone adjustments with AI", "Reference management and citation checks", "Compliance checklists and auto-flagging using AI", "Adapting to global submission formats (ICMJE, CONSORT)", "Hands-on: Regulatory-compliant IB or ICF generation"] },
            CurriculumWeek { week: 4, title: "Project + LinkedIn Optimization", duration: "5 hours", topics: &["Final project: Create a regulatory medical document using GenAI", "Peer review and editing round", "LinkedIn makeover for medical writers with AI skills", "Resume keywords to target GenAI-based med writing jobs", "Certification"] },
        ],
    },
    Course {
        id: 15,
        title: "GenAI in Pharmacovigilance",
        description: "Learn AI-powered adverse event detection, signal management, and automated PV workflow optimization.",
        category: Category::Pharma,
        level: Level::Advanced,
        duration: "4 weeks",
        rating: 4.9,
        students: 89,
        price: 7_000,
        next_session: "Dec 1, 2025",
        is_live: false,
        tags: &["Pharmacovigilance", "Adverse Events", "Signal Detection", "Safety"],
        instructor: SWATHI_PHARMACOVIGILANCE,
        co_instructor: None,
        curriculum: &[
            CurriculumWeek { week: 1, title: "Foundations of Pharmacovigilance (PV)", duration: "6 hours", topics: &["What is PV? Importance in drug safety", "Overview of ICSR, PSUR, DSUR, and Risk Management Plans", "Signal detection and benefit-risk analysis", "Regulatory authorities and PV reporting systems (e.g., EudraVigilance, Vigibase)", "Common PV challenges"] },
            CurriculumWeek { week: 2, title: "AI in Adverse Event Detection & Signal Management", duration: "7 hours", topics: &["NLP for identifying Adverse Drug Reactions (ADR) in free text", "AI-based duplicate detection and case validity checks", "Real-world data mining using AI for signal detection", "Sentiment analysis on social media & forums for PV", "Hands-on: Extracting AEs from clinical notes using ChatGPT"] },
            CurriculumWeek { week: 3, title: "Automating PV Workflows with GenAI", duration: "8 hours", topics: &["Automating case intake and triage", "Drafting narratives using GenAI", "Auto-generation of periodic safety update reports", "AI-enabled literature surveillance", "Hands-on: Draft a narrative report using GenAI tools"] },
            CurriculumWeek { week: 4, title: "Project + LinkedIn Optimization", duration: "5 hours", topics: &["Final project: AI-assisted end-to-end PV case processing", "Peer sharing of project outputs", "LinkedIn tips for PV + GenAI professionals", "Resume optimization: GenAI use cases in PV", "Certification"] },
        ],
    },
    Course {
        id: 16,
        title: "GenAI in Patent Filing & IP Management",
        description: "Master AI-driven patent search, prior art analysis, and automated patent drafting for intellectual property management.",
        category: Category::Pharma,
        level: Level::Advanced,
        duration: "4 weeks",
        rating: 4.8,
        students: 67,
        price: 7_000,
        next_session: "Dec 15, 2025",
        is_live: false,
        tags: &["Patent Filing", "IP Management", "Prior Art", "Patent Search"],
        instructor: SWATHI_PATENTS,
        co_instructor: None,
        curriculum: &[
            CurriculumWeek { week: 1, title: "Introduction to Patents and IP in Pharma", duration: "6 hours", topics: &["Types of IP: Patents, Trademarks, Copyrights, Trade Secrets", "Importance of patents in drug development", "Patent lifecycle: Filing, prosecution, granting, maintenance", "Challenges in traditional patent research", "Global patent regulations overview (India, US, EU)"] },
            CurriculumWeek { week: 2, title: "AI for Patent Search & Prior Art Analysis", duration: "7 hours", topics: &["Using GenAI for semantic patent search", "NLP-based prior art comparison and clustering", "Patent claim interpretation using LLMs", "Tools for analyzing large patent datasets", "Hands-on: Extract and compare patent claims using ChatGPT"] },
            CurriculumWeek { week: 3, title: "Drafting, Filing & Monitoring Patents with GenAI", duration: "8 hours", topics: &["GenAI-assisted patent drafting (claims, abstract, background)", "Patentability check using AI", "Competitive patent landscaping with visualization tools", "Automating status tracking and alerts", "Hands-on: Drafting a mock patent application using GenAI"] },
            CurriculumWeek { week: 4, title: "Project + LinkedIn Optimization", duration: "5 hours", topics: &["Final project: Prepare and present a GenAI-assisted patent document", "Peer feedback on novelty and structure", "LinkedIn strategies for IP & patent professionals entering GenAI", "Resume and portfolio tips for patent tech jobs", "Certification"] },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = all().iter().map(|c| c.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), 14);
    }

    #[test]
    fn empty_filter_returns_everything() {
        assert_eq!(search(&CourseFilter::default()).len(), all().len());
    }

    #[test]
    fn query_matches_tags_case_insensitively() {
        let filter = CourseFilter {
            query: Some("DOCKER".to_string()),
            ..Default::default()
        };
        let matched = search(&filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 8);
    }

    #[test]
    fn query_matches_titles_and_descriptions() {
        let filter = CourseFilter {
            query: Some("drug discovery".to_string()),
            ..Default::default()
        };
        let ids: Vec<u32> = search(&filter).iter().map(|c| c.id).collect();
        assert!(ids.contains(&9));
    }

    #[test]
    fn level_and_category_constrain_exactly() {
        let filter = CourseFilter {
            query: None,
            level: Some(Level::Advanced),
            category: Some(Category::Pharma),
        };
        let ids: Vec<u32> = search(&filter).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![9, 15, 16]);
    }

    #[test]
    fn find_unknown_id_is_none() {
        assert!(find(6).is_none());
        assert!(find(999).is_none());
        assert_eq!(find(7).unwrap().title, "AI Ethics & Responsible AI");
    }

    #[test]
    fn emi_installments_round_up() {
        let course = find(1).unwrap();
        let plans = payment_plans(course);
        assert_eq!(plans[0].amount, 16_999);
        assert_eq!(plans[1].amount, 5_667);
        assert_eq!(plans[1].total_amount, Some(17_001));
        assert_eq!(plans[2].amount, 2_834);
        assert_eq!(plans[2].total_amount, Some(17_004));
    }

    #[test]
    fn inr_formatting_groups_thousands() {
        assert_eq!(format_inr(7_000), "₹7,000");
        assert_eq!(format_inr(16_999), "₹16,999");
        assert_eq!(format_inr(999), "₹999");
    }

    #[test]
    fn filter_values_parse_case_insensitively() {
        assert_eq!(Level::parse("advanced"), Some(Level::Advanced));
        assert_eq!(Category::parse("Generative AI"), Some(Category::GenerativeAi));
        assert_eq!(Category::parse("generative ai"), Some(Category::GenerativeAi));
        assert_eq!(Level::parse("expert"), None);
    }

    #[test]
    fn curriculum_weeks_are_sequential() {
        for course in all() {
            for (i, week) in course.curriculum.iter().enumerate() {
                assert_eq!(week.week as usize, i + 1, "course {}", course.id);
            }
        }
    }
}
