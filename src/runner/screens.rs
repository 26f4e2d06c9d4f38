//! The fixed verification plan
//!
//! Localized labels the target application exposes, plus the ordered list of
//! screens to visit. These mirror the dashboard's Arabic UI strings; a label
//! change in the app is a legitimate verification failure.

/// Placeholder of the password field on the login screen
pub const PASSWORD_PLACEHOLDER: &str = "كلمة المرور";

/// Accessible name of the login button
pub const LOGIN_BUTTON: &str = "دخول";

/// Nav button that doubles as the post-login marker
pub const ORDERS_NAV: &str = "الطلبات";

/// Accessible name of per-order edit buttons on the order list
pub const EDIT_BUTTON: &str = "تعديل";

/// Heading of the edit-order modal
pub const EDIT_MODAL_HEADING: &str = "تعديل الطلب";

/// Screenshot filename for the edit-order modal
pub const EDIT_MODAL_SCREENSHOT: &str = "edit_order_modal.png";

/// One navigation step: trigger, expected marker, evidence file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenCheck {
    /// Name used in progress output
    pub title: &'static str,
    /// Accessible name of the nav button that opens the screen
    pub nav_label: &'static str,
    /// Heading whose visibility marks the transition as complete
    pub heading: &'static str,
    /// Screenshot filename within the output directory
    pub screenshot: &'static str,
    /// Whether the optional edit-modal sub-step runs after this screen
    pub edit_modal_host: bool,
}

/// The four target screens, in verification order
pub fn screen_plan() -> [ScreenCheck; 4] {
    [
        ScreenCheck {
            title: "Settings",
            nav_label: "الإعدادات",
            heading: "الإعدادات",
            screenshot: "settings_page.png",
            edit_modal_host: false,
        },
        ScreenCheck {
            title: "Order list",
            nav_label: ORDERS_NAV,
            heading: "الطلبات السابقة",
            screenshot: "order_list_page.png",
            edit_modal_host: true,
        },
        ScreenCheck {
            title: "Add order",
            nav_label: "إضافة طلب",
            heading: "إضافة طلب جديد",
            screenshot: "add_order_page.png",
            edit_modal_host: false,
        },
        ScreenCheck {
            title: "Analytics",
            nav_label: "التحليلات",
            heading: "تحليلات الأداء",
            screenshot: "analytics_page.png",
            edit_modal_host: false,
        },
    ]
}
