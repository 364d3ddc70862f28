//! Approved testimonials shown on the site. New submissions arrive by email
//! and are added here once reviewed.

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub course: &'static str,
    pub rating: u8,
    pub content: &'static str,
    pub date: &'static str,
}

pub fn approved() -> &'static [Testimonial] {
    APPROVED
}

static APPROVED: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Sarah Johnson",
        role: "Software Engineer",
        company: "Tech Solutions Inc.",
        course: "React Fundamentals",
        rating: 5,
        content: "This course completely transformed my understanding of React. The hands-on projects and expert guidance made complex concepts easy to grasp.",
        date: "January 2024",
    },
    Testimonial {
        id: 2,
        name: "Dr. Michael Chen",
        role: "Computer Science Professor",
        company: "State University",
        course: "Faculty Development Program",
        rating: 5,
        content: "Excellent program for educators looking to integrate modern technology into their teaching methods. Highly recommended!",
        date: "December 2023",
    },
    Testimonial {
        id: 3,
        name: "Priya Sharma",
        role: "Data Analyst",
        company: "Analytics Corp",
        course: "Python for Data Science",
        rating: 5,
        content: "The practical approach to learning Python for data science was exactly what I needed. Now I'm confidently working on real projects.",
        date: "November 2023",
    },
    Testimonial {
        id: 4,
        name: "Alex Rodriguez",
        role: "UI/UX Designer",
        company: "Design Studio",
        course: "UI/UX Design",
        rating: 4,
        content: "Great course with modern design principles. The instructor was knowledgeable and the projects were industry-relevant.",
        date: "October 2023",
    },
];
