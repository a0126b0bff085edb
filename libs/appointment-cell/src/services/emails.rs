// libs/appointment-cell/src/services/emails.rs
//! HTML bodies for the booking and review notifications.

use notification_cell::{escape_html, EmailMessage};

use crate::models::Appointment;

pub const BOOKING_RECEIVED_SUBJECT: &str = "Appointment Booking Received";
pub const APPROVED_SUBJECT: &str = "Appointment Confirmed";
pub const RESCHEDULE_SUBJECT: &str = "Appointment Rescheduling Required";

pub fn doctor_subject(appointment: &Appointment) -> String {
    format!("New Appointment - Priority: {}", appointment.priority)
}

pub fn booking_received(appointment: &Appointment) -> EmailMessage {
    let body = format!(
        r#"<html>
    <body>
        <h2>Booking Confirmation</h2>
        <p>Dear {name},</p>
        <p>Your appointment request has been received successfully.</p>
        <p><strong>Details:</strong></p>
        <ul>
            <li>Preferred Time: {time}</li>
            <li>Issues: {issues}</li>
            <li>Priority: {priority}</li>
        </ul>
        <p>Your appointment is pending doctor confirmation. You will receive another email once the doctor approves.</p>
        <p>Best regards,<br>Medical Consultation Team</p>
    </body>
</html>"#,
        name = escape_html(&appointment.patient_name),
        time = escape_html(&appointment.preferred_time),
        issues = escape_html(&appointment.issues),
        priority = appointment.priority,
    );

    EmailMessage::new(&appointment.patient_email, BOOKING_RECEIVED_SUBJECT, body)
}

pub fn doctor_new_request(appointment: &Appointment, doctor_email: &str) -> EmailMessage {
    let body = format!(
        r#"<html>
    <body>
        <h2>New Appointment Request</h2>
        <p><strong>Patient:</strong> {name}</p>
        <p><strong>Email:</strong> {email}</p>
        <p><strong>Issues:</strong> {issues}</p>
        <p><strong>Preferred Time:</strong> {time}</p>
        <p><strong>Priority:</strong> {priority}</p>
        <p>Please log in to your dashboard to approve or reject this appointment.</p>
    </body>
</html>"#,
        name = escape_html(&appointment.patient_name),
        email = escape_html(&appointment.patient_email),
        issues = escape_html(&appointment.issues),
        time = escape_html(&appointment.preferred_time),
        priority = appointment.priority,
    );

    EmailMessage::new(doctor_email, doctor_subject(appointment), body)
}

pub fn appointment_approved(appointment: &Appointment, meeting_link: &str) -> EmailMessage {
    let link = escape_html(meeting_link);
    let body = format!(
        r#"<html>
    <body>
        <h2>Appointment Confirmed!</h2>
        <p>Dear {name},</p>
        <p>Your appointment has been approved by the doctor.</p>
        <p><strong>Details:</strong></p>
        <ul>
            <li>Time: {time}</li>
            <li>Meeting Link: <a href="{link}">{link}</a></li>
        </ul>
        <p>You will receive a reminder 10 minutes before your consultation.</p>
        <p>Best regards,<br>Medical Consultation Team</p>
    </body>
</html>"#,
        name = escape_html(&appointment.patient_name),
        time = escape_html(&appointment.preferred_time),
        link = link,
    );

    EmailMessage::new(&appointment.patient_email, APPROVED_SUBJECT, body)
}

pub fn reschedule_required(appointment: &Appointment, reschedule_url: &str) -> EmailMessage {
    let body = format!(
        r#"<html>
    <body>
        <h2>Appointment Update</h2>
        <p>Dear {name},</p>
        <p>Unfortunately, the doctor is not available at your requested time.</p>
        <p>Please reschedule your appointment: <a href="{url}">Reschedule Now</a></p>
        <p>We apologize for the inconvenience.</p>
        <p>Best regards,<br>Medical Consultation Team</p>
    </body>
</html>"#,
        name = escape_html(&appointment.patient_name),
        url = escape_html(reschedule_url),
    );

    EmailMessage::new(&appointment.patient_email, RESCHEDULE_SUBJECT, body)
}
