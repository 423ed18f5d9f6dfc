/// Every user-visible string of the gate, one table per locale.
#[derive(Debug, PartialEq, Eq)]
pub struct Texts {
    pub app_title: &'static str,
    pub login_title: &'static str,
    pub username_label: &'static str,
    pub password_label: &'static str,
    pub login_button: &'static str,
    pub login_failed: &'static str,
    pub logout_button: &'static str,
    pub loading_label: &'static str,
    pub close_label: &'static str,
}

pub static TEXTS_ZH: Texts = Texts {
    app_title: "Uranus",
    login_title: "登录",
    username_label: "用户名",
    password_label: "密码",
    login_button: "登录",
    login_failed: "登录失败",
    logout_button: "退出",
    loading_label: "加载中",
    close_label: "关闭",
};

pub static TEXTS_EN: Texts = Texts {
    app_title: "Uranus",
    login_title: "Login",
    username_label: "Username",
    password_label: "Password",
    login_button: "Log in",
    login_failed: "Login failed",
    logout_button: "Log out",
    loading_label: "Loading",
    close_label: "Close",
};

impl Texts {
    /// Picks the table for a BCP 47 language tag such as `en-US`.
    /// Anything that isn't English falls back to the Chinese table.
    pub fn for_locale(tag: &str) -> &'static Texts {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("en") {
            &TEXTS_EN
        } else {
            &TEXTS_ZH
        }
    }
}
