use super::*;

#[test]
fn dashboard_pending_while_initializing() {
    assert_eq!(dashboard_view(&AuthState::initializing()), DashboardView::Pending);
}

#[test]
fn dashboard_overview_when_logged_in() {
    assert_eq!(dashboard_view(&AuthState::resolved(true)), DashboardView::Overview);
}

#[test]
fn dashboard_prompts_guest_to_sign_in() {
    assert_eq!(dashboard_view(&AuthState::signed_out()), DashboardView::SignInPrompt);
}
