//! Hardcoded 802.11a preamble samples.
//!
//! The preamble is 320 samples: ten repetitions of a 16-sample short
//! training sequence (STS) followed by a cyclic-prefixed pair of 64-sample
//! long training sequences (LTS). Values are transcribed bit-for-bit from
//! the reference implementation's constant tables; see the Data Model
//! section of the design spec for why they must stay byte-for-byte
//! reproducible rather than derived at runtime.

use num_complex::Complex64;

pub const STS_LEN: usize = 16;
pub const STS_REPETITIONS: usize = 10;
pub const LTS_LEN: usize = 64;
pub const LTS_CP_LEN: usize = 32;
pub const PREAMBLE_LEN: usize = STS_LEN * STS_REPETITIONS + LTS_CP_LEN + 2 * LTS_LEN;

pub const STS_SAMPLES: [Complex64; 16] = [
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(0.0919975090242, 0.0),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(0.0, 0.0919975090242),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(0.00233959188499, -0.132443716852),
];

pub const PREAMBLE_SAMPLES: [Complex64; 320] = [
    Complex64::new(0.0229993772561, 0.0229993772561),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(0.0919975090242, 0.0),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(0.0, 0.0919975090242),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(0.0919975090242, 0.0),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(0.0, 0.0919975090242),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(0.0919975090242, 0.0),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(0.0, 0.0919975090242),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(0.0919975090242, 0.0),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(0.0, 0.0919975090242),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(0.0919975090242, 0.0),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(0.0, 0.0919975090242),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(0.0919975090242, 0.0),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(0.0, 0.0919975090242),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(0.0919975090242, 0.0),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(0.0, 0.0919975090242),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(0.0919975090242, 0.0),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(0.0, 0.0919975090242),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(0.0919975090242, 0.0),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(0.0, 0.0919975090242),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(0.0919975090242, 0.0),
    Complex64::new(0.142755292821, -0.0126511678539),
    Complex64::new(-0.0134727232705, -0.0785247857538),
    Complex64::new(-0.132443716852, 0.00233959188499),
    Complex64::new(0.0459987545121, 0.0459987545121),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(0.0, 0.0919975090242),
    Complex64::new(-0.0126511678539, 0.142755292821),
    Complex64::new(-0.0785247857538, -0.0134727232705),
    Complex64::new(0.00233959188499, -0.132443716852),
    Complex64::new(-0.078, 0.0),
    Complex64::new(0.0122845904586, -0.0975995535921),
    Complex64::new(0.0917165491224, -0.105871659819),
    Complex64::new(-0.0918875552628, -0.115128708911),
    Complex64::new(-0.00280594417349, -0.0537742664765),
    Complex64::new(0.0750736970682, 0.0740404189251),
    Complex64::new(-0.127324359908, 0.0205013799863),
    Complex64::new(-0.121887009061, 0.0165662181391),
    Complex64::new(-0.0350412607362, 0.150888347648),
    Complex64::new(-0.0564551284485, 0.0218039206074),
    Complex64::new(-0.0603101003162, -0.0812861241157),
    Complex64::new(0.0695568474069, -0.0141219585906),
    Complex64::new(0.0822183223031, -0.0923565519537),
    Complex64::new(-0.131262608975, -0.0652272290181),
    Complex64::new(-0.0572063458715, -0.0392985881741),
    Complex64::new(0.0369179420011, -0.0983441502871),
    Complex64::new(0.0625, 0.0625),
    Complex64::new(0.11923908851, 0.0040955944148),
    Complex64::new(-0.0224832063078, -0.160657332953),
    Complex64::new(0.0586687671287, 0.0149389994507),
    Complex64::new(0.0244758515211, 0.0585317956946),
    Complex64::new(-0.136804876816, 0.0473798113657),
    Complex64::new(0.000988979708988, 0.115004643624),
    Complex64::new(0.0533377343742, -0.00407632648051),
    Complex64::new(0.0975412607362, 0.0258883476483),
    Complex64::new(-0.0383159674744, 0.106170912615),
    Complex64::new(-0.115131214782, 0.0551804953744),
    Complex64::new(0.059823844859, 0.0877067598357),
    Complex64::new(0.0211117703493, -0.0278859188282),
    Complex64::new(0.0968318845911, -0.0827979094878),
    Complex64::new(0.0397496983535, 0.111157943051),
    Complex64::new(-0.00512125036042, 0.120325132674),
    Complex64::new(0.15625, 0.0),
    Complex64::new(-0.00512125036042, -0.120325132674),
    Complex64::new(0.0397496983535, -0.111157943051),
    Complex64::new(0.0968318845911, 0.0827979094878),
    Complex64::new(0.0211117703493, 0.0278859188282),
    Complex64::new(0.059823844859, -0.0877067598357),
    Complex64::new(-0.115131214782, -0.0551804953744),
    Complex64::new(-0.0383159674744, -0.106170912615),
    Complex64::new(0.0975412607362, -0.0258883476483),
    Complex64::new(0.0533377343742, 0.00407632648051),
    Complex64::new(0.000988979708988, -0.115004643624),
    Complex64::new(-0.136804876816, -0.0473798113657),
    Complex64::new(0.0244758515211, -0.0585317956946),
    Complex64::new(0.0586687671287, -0.0149389994507),
    Complex64::new(-0.0224832063078, 0.160657332953),
    Complex64::new(0.11923908851, -0.0040955944148),
    Complex64::new(0.0625, -0.0625),
    Complex64::new(0.0369179420011, 0.0983441502871),
    Complex64::new(-0.0572063458715, 0.0392985881741),
    Complex64::new(-0.131262608975, 0.0652272290181),
    Complex64::new(0.0822183223031, 0.0923565519537),
    Complex64::new(0.0695568474069, 0.0141219585906),
    Complex64::new(-0.0603101003162, 0.0812861241157),
    Complex64::new(-0.0564551284485, -0.0218039206074),
    Complex64::new(-0.0350412607362, -0.150888347648),
    Complex64::new(-0.121887009061, -0.0165662181391),
    Complex64::new(-0.127324359908, -0.0205013799863),
    Complex64::new(0.0750736970682, -0.0740404189251),
    Complex64::new(-0.00280594417349, 0.0537742664765),
    Complex64::new(-0.0918875552628, 0.115128708911),
    Complex64::new(0.0917165491224, 0.105871659819),
    Complex64::new(0.0122845904586, 0.0975995535921),
    Complex64::new(-0.15625, 0.0),
    Complex64::new(0.0122845904586, -0.0975995535921),
    Complex64::new(0.0917165491224, -0.105871659819),
    Complex64::new(-0.0918875552628, -0.115128708911),
    Complex64::new(-0.00280594417349, -0.0537742664765),
    Complex64::new(0.0750736970682, 0.0740404189251),
    Complex64::new(-0.127324359908, 0.0205013799863),
    Complex64::new(-0.121887009061, 0.0165662181391),
    Complex64::new(-0.0350412607362, 0.150888347648),
    Complex64::new(-0.0564551284485, 0.0218039206074),
    Complex64::new(-0.0603101003162, -0.0812861241157),
    Complex64::new(0.0695568474069, -0.0141219585906),
    Complex64::new(0.0822183223031, -0.0923565519537),
    Complex64::new(-0.131262608975, -0.0652272290181),
    Complex64::new(-0.0572063458715, -0.0392985881741),
    Complex64::new(0.0369179420011, -0.0983441502871),
    Complex64::new(0.0625, 0.0625),
    Complex64::new(0.11923908851, 0.0040955944148),
    Complex64::new(-0.0224832063078, -0.160657332953),
    Complex64::new(0.0586687671287, 0.0149389994507),
    Complex64::new(0.0244758515211, 0.0585317956946),
    Complex64::new(-0.136804876816, 0.0473798113657),
    Complex64::new(0.000988979708988, 0.115004643624),
    Complex64::new(0.0533377343742, -0.00407632648051),
    Complex64::new(0.0975412607362, 0.0258883476483),
    Complex64::new(-0.0383159674744, 0.106170912615),
    Complex64::new(-0.115131214782, 0.0551804953744),
    Complex64::new(0.059823844859, 0.0877067598357),
    Complex64::new(0.0211117703493, -0.0278859188282),
    Complex64::new(0.0968318845911, -0.0827979094878),
    Complex64::new(0.0397496983535, 0.111157943051),
    Complex64::new(-0.00512125036042, 0.120325132674),
    Complex64::new(0.15625, 0.0),
    Complex64::new(-0.00512125036042, -0.120325132674),
    Complex64::new(0.0397496983535, -0.111157943051),
    Complex64::new(0.0968318845911, 0.0827979094878),
    Complex64::new(0.0211117703493, 0.0278859188282),
    Complex64::new(0.059823844859, -0.0877067598357),
    Complex64::new(-0.115131214782, -0.0551804953744),
    Complex64::new(-0.0383159674744, -0.106170912615),
    Complex64::new(0.0975412607362, -0.0258883476483),
    Complex64::new(0.0533377343742, 0.00407632648051),
    Complex64::new(0.000988979708988, -0.115004643624),
    Complex64::new(-0.136804876816, -0.0473798113657),
    Complex64::new(0.0244758515211, -0.0585317956946),
    Complex64::new(0.0586687671287, -0.0149389994507),
    Complex64::new(-0.0224832063078, 0.160657332953),
    Complex64::new(0.11923908851, -0.0040955944148),
    Complex64::new(0.0625, -0.0625),
    Complex64::new(0.0369179420011, 0.0983441502871),
    Complex64::new(-0.0572063458715, 0.0392985881741),
    Complex64::new(-0.131262608975, 0.0652272290181),
    Complex64::new(0.0822183223031, 0.0923565519537),
    Complex64::new(0.0695568474069, 0.0141219585906),
    Complex64::new(-0.0603101003162, 0.0812861241157),
    Complex64::new(-0.0564551284485, -0.0218039206074),
    Complex64::new(-0.0350412607362, -0.150888347648),
    Complex64::new(-0.121887009061, -0.0165662181391),
    Complex64::new(-0.127324359908, -0.0205013799863),
    Complex64::new(0.0750736970682, -0.0740404189251),
    Complex64::new(-0.00280594417349, 0.0537742664765),
    Complex64::new(-0.0918875552628, 0.115128708911),
    Complex64::new(0.0917165491224, 0.105871659819),
    Complex64::new(0.0122845904586, 0.0975995535921),
    Complex64::new(-0.15625, 0.0),
    Complex64::new(0.0122845904586, -0.0975995535921),
    Complex64::new(0.0917165491224, -0.105871659819),
    Complex64::new(-0.0918875552628, -0.115128708911),
    Complex64::new(-0.00280594417349, -0.0537742664765),
    Complex64::new(0.0750736970682, 0.0740404189251),
    Complex64::new(-0.127324359908, 0.0205013799863),
    Complex64::new(-0.121887009061, 0.0165662181391),
    Complex64::new(-0.0350412607362, 0.150888347648),
    Complex64::new(-0.0564551284485, 0.0218039206074),
    Complex64::new(-0.0603101003162, -0.0812861241157),
    Complex64::new(0.0695568474069, -0.0141219585906),
    Complex64::new(0.0822183223031, -0.0923565519537),
    Complex64::new(-0.131262608975, -0.0652272290181),
    Complex64::new(-0.0572063458715, -0.0392985881741),
    Complex64::new(0.0369179420011, -0.0983441502871),
    Complex64::new(0.0625, 0.0625),
    Complex64::new(0.11923908851, 0.0040955944148),
    Complex64::new(-0.0224832063078, -0.160657332953),
    Complex64::new(0.0586687671287, 0.0149389994507),
    Complex64::new(0.0244758515211, 0.0585317956946),
    Complex64::new(-0.136804876816, 0.0473798113657),
    Complex64::new(0.000988979708988, 0.115004643624),
    Complex64::new(0.0533377343742, -0.00407632648051),
    Complex64::new(0.0975412607362, 0.0258883476483),
    Complex64::new(-0.0383159674744, 0.106170912615),
    Complex64::new(-0.115131214782, 0.0551804953744),
    Complex64::new(0.059823844859, 0.0877067598357),
    Complex64::new(0.0211117703493, -0.0278859188282),
    Complex64::new(0.0968318845911, -0.0827979094878),
    Complex64::new(0.0397496983535, 0.111157943051),
    Complex64::new(-0.00512125036042, 0.120325132674),
];

pub const LTS_FREQ_DOMAIN: [Complex64; 64] = [
    Complex64::new(0.0, 0.0),
    Complex64::new(0.0, 0.0),
    Complex64::new(0.0, 0.0),
    Complex64::new(0.0, 0.0),
    Complex64::new(0.0, 0.0),
    Complex64::new(0.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(0.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(0.0, 0.0),
    Complex64::new(0.0, 0.0),
    Complex64::new(0.0, 0.0),
    Complex64::new(0.0, 0.0),
    Complex64::new(0.0, 0.0),
];

pub const LTS_TIME_DOMAIN_CONJ: [Complex64; 64] = [
    Complex64::new(0.15625, 0.0),
    Complex64::new(-0.00512125036042, 0.120325132674),
    Complex64::new(0.0397496983535, 0.111157943051),
    Complex64::new(0.0968318845911, -0.0827979094878),
    Complex64::new(0.0211117703493, -0.0278859188282),
    Complex64::new(0.059823844859, 0.0877067598357),
    Complex64::new(-0.115131214782, 0.0551804953744),
    Complex64::new(-0.0383159674744, 0.106170912615),
    Complex64::new(0.0975412607362, 0.0258883476483),
    Complex64::new(0.0533377343742, -0.00407632648051),
    Complex64::new(0.000988979708988, 0.115004643624),
    Complex64::new(-0.136804876816, 0.0473798113657),
    Complex64::new(0.0244758515211, 0.0585317956946),
    Complex64::new(0.0586687671287, 0.0149389994507),
    Complex64::new(-0.0224832063078, -0.160657332953),
    Complex64::new(0.11923908851, 0.0040955944148),
    Complex64::new(0.0625, 0.0625),
    Complex64::new(0.0369179420011, -0.0983441502871),
    Complex64::new(-0.0572063458715, -0.0392985881741),
    Complex64::new(-0.131262608975, -0.0652272290181),
    Complex64::new(0.0822183223031, -0.0923565519537),
    Complex64::new(0.0695568474069, -0.0141219585906),
    Complex64::new(-0.0603101003162, -0.0812861241157),
    Complex64::new(-0.0564551284485, 0.0218039206074),
    Complex64::new(-0.0350412607362, 0.150888347648),
    Complex64::new(-0.121887009061, 0.0165662181391),
    Complex64::new(-0.127324359908, 0.0205013799863),
    Complex64::new(0.0750736970682, 0.0740404189251),
    Complex64::new(-0.00280594417349, -0.0537742664765),
    Complex64::new(-0.0918875552628, -0.115128708911),
    Complex64::new(0.0917165491224, -0.105871659819),
    Complex64::new(0.0122845904586, -0.0975995535921),
    Complex64::new(-0.15625, -0.0),
    Complex64::new(0.0122845904586, 0.0975995535921),
    Complex64::new(0.0917165491224, 0.105871659819),
    Complex64::new(-0.0918875552628, 0.115128708911),
    Complex64::new(-0.00280594417349, 0.0537742664765),
    Complex64::new(0.0750736970682, -0.0740404189251),
    Complex64::new(-0.127324359908, -0.0205013799863),
    Complex64::new(-0.121887009061, -0.0165662181391),
    Complex64::new(-0.0350412607362, -0.150888347648),
    Complex64::new(-0.0564551284485, -0.0218039206074),
    Complex64::new(-0.0603101003162, 0.0812861241157),
    Complex64::new(0.0695568474069, 0.0141219585906),
    Complex64::new(0.0822183223031, 0.0923565519537),
    Complex64::new(-0.131262608975, 0.0652272290181),
    Complex64::new(-0.0572063458715, 0.0392985881741),
    Complex64::new(0.0369179420011, 0.0983441502871),
    Complex64::new(0.0625, -0.0625),
    Complex64::new(0.11923908851, -0.0040955944148),
    Complex64::new(-0.0224832063078, 0.160657332953),
    Complex64::new(0.0586687671287, -0.0149389994507),
    Complex64::new(0.0244758515211, -0.0585317956946),
    Complex64::new(-0.136804876816, -0.0473798113657),
    Complex64::new(0.000988979708988, -0.115004643624),
    Complex64::new(0.0533377343742, 0.00407632648051),
    Complex64::new(0.0975412607362, -0.0258883476483),
    Complex64::new(-0.0383159674744, -0.106170912615),
    Complex64::new(-0.115131214782, -0.0551804953744),
    Complex64::new(0.059823844859, -0.0877067598357),
    Complex64::new(0.0211117703493, 0.0278859188282),
    Complex64::new(0.0968318845911, 0.0827979094878),
    Complex64::new(0.0397496983535, -0.111157943051),
    Complex64::new(-0.00512125036042, -0.120325132674),
];

/// Builds the 320-sample preamble as a fresh vector for prepending to a frame.
pub fn preamble_samples() -> Vec<Complex64> {
    PREAMBLE_SAMPLES.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preamble_length_matches_sts_and_lts_layout() {
        assert_eq!(PREAMBLE_SAMPLES.len(), PREAMBLE_LEN);
        assert_eq!(PREAMBLE_LEN, 320);
    }

    #[test]
    fn sts_repeats_ten_times_in_preamble_header() {
        for rep in 0..STS_REPETITIONS {
            let start = rep * STS_LEN;
            assert_eq!(&PREAMBLE_SAMPLES[start..start + STS_LEN], &STS_SAMPLES[..]);
        }
    }

    #[test]
    fn lts_freq_domain_has_nulled_dc_and_edges() {
        assert_eq!(LTS_FREQ_DOMAIN[0], Complex64::new(0.0, 0.0));
        assert_eq!(LTS_FREQ_DOMAIN[32], Complex64::new(0.0, 0.0));
    }
}
