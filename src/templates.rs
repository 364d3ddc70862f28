//! Email rendering for form submissions.
//!
//! Each generator produces the subject line and an HTML body; the plain-text
//! alternative is derived later by the mailer. User-provided values are
//! HTML-escaped before interpolation.

use crate::forms::{ContactMessage, FdpRegistration, TestimonialSubmission};

pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

pub fn fdp_registration(form: &FdpRegistration) -> RenderedEmail {
    let subject = format!("FDP Registration Request - {}", form.college_name);

    let requirements_block = form
        .specific_requirements
        .as_deref()
        .filter(|r| !r.is_empty())
        .map(|r| {
            format!(
                "<p><strong>Specific Requirements:</strong><br>{}</p>",
                escape(r)
            )
        })
        .unwrap_or_default();

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #2563eb;">Faculty Development Program Registration</h2>

  <div style="background-color: #f8fafc; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <h3 style="color: #1e40af; margin-top: 0;">Institution Details</h3>
    <p><strong>College Name:</strong> {college}</p>
    <p><strong>Contact Person:</strong> {person}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Phone:</strong> {phone}</p>
    <p><strong>Location:</strong> {location}</p>
  </div>

  <div style="background-color: #f0f9ff; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <h3 style="color: #1e40af; margin-top: 0;">Program Requirements</h3>
    <p><strong>Expected Participants:</strong> {participants}</p>
    <p><strong>Preferred Dates:</strong> {dates}</p>
    {requirements_block}
  </div>

  <div style="border-top: 2px solid #e5e7eb; padding-top: 20px; margin-top: 30px;">
    <p style="color: #6b7280; font-size: 14px;">
      This request was submitted through the FutureOS website.<br>
      Please respond within 24-48 hours to confirm the FDP schedule.
    </p>
  </div>
</div>"#,
        college = escape(&form.college_name),
        person = escape(&form.contact_person),
        email = escape(&form.email),
        phone = escape(&form.phone),
        location = escape(&form.location),
        participants = escape(&form.expected_participants),
        dates = escape(&form.preferred_dates),
    );

    RenderedEmail { subject, html }
}

pub fn testimonial(form: &TestimonialSubmission) -> RenderedEmail {
    let subject = format!("New Testimonial Submission - {}", form.name);
    let stars = star_string(form.rating);

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #2563eb;">New Testimonial Received</h2>

  <div style="background-color: #f8fafc; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <h3 style="color: #1e40af; margin-top: 0;">Reviewer Information</h3>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Role:</strong> {role}</p>
    <p><strong>Company:</strong> {company}</p>
    <p><strong>Course:</strong> {course}</p>
  </div>

  <div style="background-color: #fefce8; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <h3 style="color: #a16207; margin-top: 0;">Rating &amp; Review</h3>
    <p><strong>Rating:</strong> {stars} ({rating}/5)</p>
    <div style="background-color: white; padding: 15px; border-radius: 5px; margin-top: 10px;">
      <p style="font-style: italic; margin: 0;">"{testimonial}"</p>
    </div>
  </div>

  <div style="border-top: 2px solid #e5e7eb; padding-top: 20px; margin-top: 30px;">
    <p style="color: #6b7280; font-size: 14px;">
      This testimonial was submitted through the FutureOS website.<br>
      Review and approve for public display if appropriate.
    </p>
  </div>
</div>"#,
        name = escape(&form.name),
        role = escape(&form.role),
        company = escape(&form.company),
        course = escape(&form.course),
        stars = stars,
        rating = form.rating,
        testimonial = escape(&form.testimonial),
    );

    RenderedEmail { subject, html }
}

pub fn contact(form: &ContactMessage) -> RenderedEmail {
    let subject = format!("Contact Form Submission - {}", form.subject);

    let phone_row = form
        .phone
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p><strong>Phone:</strong> {}</p>", escape(p)))
        .unwrap_or_default();

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #2563eb;">New Contact Form Submission</h2>

  <div style="background-color: #f8fafc; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <h3 style="color: #1e40af; margin-top: 0;">Contact Information</h3>
    <p><strong>Name:</strong> {first} {last}</p>
    <p><strong>Email:</strong> {email}</p>
    {phone_row}
    <p><strong>Subject:</strong> {subject}</p>
  </div>

  <div style="background-color: #f0f9ff; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <h3 style="color: #1e40af; margin-top: 0;">Message</h3>
    <div style="background-color: white; padding: 15px; border-radius: 5px;">
      <p style="margin: 0; white-space: pre-line;">{message}</p>
    </div>
  </div>

  <div style="border-top: 2px solid #e5e7eb; padding-top: 20px; margin-top: 30px;">
    <p style="color: #6b7280; font-size: 14px;">
      This message was sent through the FutureOS contact form.<br>
      Please respond to the sender at: <a href="mailto:{email}">{email}</a>
    </p>
  </div>
</div>"#,
        first = escape(&form.first_name),
        last = escape(&form.last_name),
        email = escape(&form.email),
        phone_row = phone_row,
        subject = escape(&form.subject),
        message = escape(&form.message),
    );

    RenderedEmail { subject, html }
}

fn star_string(rating: i64) -> String {
    let filled = rating.clamp(0, 5) as usize;
    "⭐".repeat(filled) + &"☆".repeat(5 - filled)
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
