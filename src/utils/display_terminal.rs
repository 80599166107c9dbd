//! 터미널 출력 포맷팅 유틸리티
//!
//! 애플리케이션 부트스트랩 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 완료 상태 등을 시각적으로 표현합니다.

/// 박스 형태의 제목을 출력합니다.
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 부트스트랩 완료 요약을 출력합니다.
pub fn print_final_summary(backend: &str, collections: &[&str], bind_address: &str) {
    println!();
    print_boxed_title("🎉 CROWDFUND BACKEND READY");
    println!("   🗄️  Store backend: {}", backend);
    println!("   📦 Collections: {}", collections.join(", "));
    println!("   🌐 Listening on: http://{}", bind_address);
    println!();
}
