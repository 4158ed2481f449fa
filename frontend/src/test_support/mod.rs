#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ClassDescriptor, Identity, Role};
    use crate::state::session::SessionStore;
    use crate::utils::storage::MemoryStorage;
    use leptos::*;
    use std::rc::Rc;

    pub fn student() -> Identity {
        Identity {
            email: "alice@school.edu".into(),
            role: Role::Student,
        }
    }

    pub fn teacher() -> Identity {
        Identity {
            email: "prof@school.edu".into(),
            role: Role::Teacher,
        }
    }

    pub fn maths_class() -> ClassDescriptor {
        ClassDescriptor {
            id: 1,
            name: "Mathematics 101".into(),
            room: "Room 101".into(),
            time: "9:00 AM".into(),
            student_count: 32,
        }
    }

    /// Provides a session store over in-memory storage, signed in as
    /// `identity` when given.
    pub fn provide_session(identity: Option<Identity>) -> SessionStore {
        let store = SessionStore::new(Rc::new(MemoryStorage::default()), "smartAttendanceUser");
        if let Some(identity) = identity {
            store
                .login(&identity.email, identity.role.as_str())
                .expect("fixture identity is valid");
        }
        provide_context(store.clone());
        store
    }
}

#[cfg(test)]
pub mod frames {
    use crate::api::ClassDescriptor;
    use crate::qr::{decoder::LumaFrame, QrEncoder};
    use chrono::{TimeZone, Utc};
    use image::DynamicImage;

    /// Greyscale frame of a freshly rendered attendance code for `class`,
    /// along with the payload it carries.
    pub fn rendered_token(class: &ClassDescriptor) -> (LumaFrame, String) {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap();
        let encoder = QrEncoder::default();
        let image = encoder.encode_at(class, "prof", now).unwrap();
        let luma = DynamicImage::ImageRgb8(encoder.render_pixels(&image.payload).unwrap()).to_luma8();
        let (w, h) = luma.dimensions();
        (LumaFrame::new(w, h, luma.into_raw()).unwrap(), image.payload)
    }
}
