use rand::seq::SliceRandom;
use rand::Rng;

/// One piece of confetti on the win screen
#[derive(Debug, Clone)]
pub struct ConfettiParticle {
    pub x: f64,
    pub y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub symbol: char,
    pub color_index: usize,
    pub age: f64,
    pub max_age: f64,
}

impl ConfettiParticle {
    fn new(x: f64, y: f64) -> Self {
        let mut rng = rand::thread_rng();

        Self {
            x,
            y,
            vel_x: rng.gen_range(-2.0..2.0),
            vel_y: rng.gen_range(0.5..2.5), // downward drift, screen y grows down
            symbol: *['*', '+', 'o', '.', '~'].choose(&mut rng).unwrap_or(&'*'),
            color_index: rng.gen_range(0..7),
            age: 0.0,
            max_age: rng.gen_range(2.0..4.0),
        }
    }

    fn update(&mut self, dt: f64) -> bool {
        self.x += self.vel_x * dt;
        self.y += self.vel_y * dt;
        self.vel_y += 3.0 * dt;

        self.age += dt;
        self.age < self.max_age
    }
}

/// Confetti shower shown when the word is guessed. Advanced from the
/// event loop's tick; inert the rest of the time.
#[derive(Debug)]
pub struct CelebrationAnimation {
    pub particles: Vec<ConfettiParticle>,
    pub is_active: bool,
    ticks_left: u32,
    terminal_width: f64,
    terminal_height: f64,
}

/// Ticks the shower lasts; at the event loop's 100ms tick this is ~4s.
const DURATION_TICKS: u32 = 40;

const FRAME_DT: f64 = 0.1;

impl CelebrationAnimation {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            is_active: false,
            ticks_left: 0,
            terminal_width: 80.0,
            terminal_height: 24.0,
        }
    }

    pub fn start(&mut self, width: u16, height: u16) {
        let mut rng = rand::thread_rng();

        self.particles.clear();
        self.is_active = true;
        self.ticks_left = DURATION_TICKS;
        self.terminal_width = width as f64;
        self.terminal_height = height as f64;

        // Scatter confetti across the top third of the screen
        for _ in 0..40 {
            let x = rng.gen_range(0.0..self.terminal_width);
            let y = rng.gen_range(0.0..self.terminal_height / 3.0);
            self.particles.push(ConfettiParticle::new(x, y));
        }
    }

    pub fn update(&mut self) {
        if !self.is_active {
            return;
        }

        self.ticks_left = self.ticks_left.saturating_sub(1);
        if self.ticks_left == 0 {
            self.is_active = false;
            self.particles.clear();
            return;
        }

        let width = self.terminal_width;
        let height = self.terminal_height;
        self.particles.retain_mut(|particle| {
            let still_alive = particle.update(FRAME_DT);

            let buffer = 2.0;
            let off_screen = particle.y > height + buffer
                || particle.x < -buffer
                || particle.x > width + buffer;
            still_alive && !off_screen
        });
    }

    pub fn stop(&mut self) {
        self.is_active = false;
        self.particles.clear();
        self.ticks_left = 0;
    }
}

impl Default for CelebrationAnimation {
    fn default() -> Self {
        Self::new()
    }
}
